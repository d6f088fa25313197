use std::sync::Arc;

use async_trait::async_trait;
use potato_blocker_util::math::position::BlockPos;
use uuid::Uuid;

use super::HostError;

/// Read access to the blocks of a dimension.
#[async_trait]
pub trait BlockAccessor: Send + Sync {
    /// Type name of the block at `pos`, e.g. `minecraft:potatoes`.
    async fn get_block_name(&self, pos: &BlockPos) -> Result<String, HostError>;
}

/// A connected player as exposed by the host.
#[async_trait]
pub trait Player: Send + Sync {
    /// The player's real (account) name.
    fn name(&self) -> &str;

    fn uuid(&self) -> Uuid;

    /// The dimension the player is in.
    fn world(&self) -> Arc<dyn BlockAccessor>;

    async fn send_message(&self, text: &str) -> Result<(), HostError>;
}
