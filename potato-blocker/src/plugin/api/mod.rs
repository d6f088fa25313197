use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use potato_blocker_util::math::position::BlockPos;
use thiserror::Error;

pub mod context;
pub mod events;
pub mod player;

pub use context::Context;
pub use events::{Cancellable, Event, EventHandler, EventPriority};

use events::player_interact_block::PlayerInteractBlockEvent;

/// Handle for a registered listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Failures reported by host API calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Listener registration rejected: {0}")]
    RegistrationRejected(String),
    #[error("No listener registered as {0}")]
    UnknownListener(ListenerId),
    #[error("Could not read block at {pos}: {reason}")]
    BlockUnavailable { pos: BlockPos, reason: String },
    #[error("Could not deliver message to {player}: {reason}")]
    MessageUndelivered { player: String, reason: String },
}

/// The host's event dispatcher.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn register_interact_listener(
        &self,
        handler: Arc<dyn EventHandler<PlayerInteractBlockEvent>>,
        priority: EventPriority,
        blocking: bool,
    ) -> Result<ListenerId, HostError>;

    async fn remove_listener(&self, listener: ListenerId) -> Result<(), HostError>;
}
