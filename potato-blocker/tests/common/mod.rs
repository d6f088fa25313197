#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use potato_blocker::METADATA;
use potato_blocker::plugin::api::events::player_interact_block::PlayerInteractBlockEvent;
use potato_blocker::plugin::api::player::{BlockAccessor, Player};
use potato_blocker::plugin::api::{
    Context, EventBus, EventHandler, EventPriority, HostError, ListenerId,
};
use potato_blocker_util::math::position::BlockPos;
use uuid::Uuid;

type InteractHandler = Arc<dyn EventHandler<PlayerInteractBlockEvent>>;

/// In-memory event bus that runs blocking handlers in registration order.
#[derive(Default)]
pub struct MockBus {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, InteractHandler, EventPriority, bool)>>,
    pub reject_registration: AtomicBool,
    pub fail_removal: AtomicBool,
}

impl MockBus {
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    pub fn registrations(&self) -> Vec<(EventPriority, bool)> {
        self.listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, priority, blocking)| (*priority, *blocking))
            .collect()
    }

    pub async fn dispatch(&self, event: &mut PlayerInteractBlockEvent) {
        let handlers: Vec<InteractHandler> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, handler, _, _)| handler.clone())
            .collect();
        for handler in handlers {
            handler.handle_blocking(event).await;
        }
    }
}

#[async_trait]
impl EventBus for MockBus {
    async fn register_interact_listener(
        &self,
        handler: InteractHandler,
        priority: EventPriority,
        blocking: bool,
    ) -> Result<ListenerId, HostError> {
        if self.reject_registration.load(Ordering::Relaxed) {
            return Err(HostError::RegistrationRejected("bus closed".to_string()));
        }
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap()
            .push((id, handler, priority, blocking));
        Ok(id)
    }

    async fn remove_listener(&self, listener: ListenerId) -> Result<(), HostError> {
        let mut listeners = self.listeners.lock().unwrap();
        let before = listeners.len();
        listeners.retain(|(id, ..)| *id != listener);
        if self.fail_removal.load(Ordering::Relaxed) {
            return Err(HostError::UnknownListener(listener));
        }
        if listeners.len() == before {
            return Err(HostError::UnknownListener(listener));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockWorld {
    blocks: Mutex<HashMap<BlockPos, String>>,
    pub lookups: AtomicU64,
}

impl MockWorld {
    pub fn with_block(pos: BlockPos, block: &str) -> Arc<Self> {
        let world = Self::default();
        world.blocks.lock().unwrap().insert(pos, block.to_string());
        Arc::new(world)
    }
}

#[async_trait]
impl BlockAccessor for MockWorld {
    async fn get_block_name(&self, pos: &BlockPos) -> Result<String, HostError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.blocks
            .lock()
            .unwrap()
            .get(pos)
            .cloned()
            .ok_or_else(|| HostError::BlockUnavailable {
                pos: *pos,
                reason: "chunk not loaded".to_string(),
            })
    }
}

pub struct MockPlayer {
    name: String,
    uuid: Uuid,
    world: Arc<MockWorld>,
    received: Mutex<Vec<String>>,
    /// Number of upcoming sends that fail before delivery works again.
    pub failing_sends: AtomicU64,
}

impl MockPlayer {
    pub fn new(name: &str, world: Arc<MockWorld>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            uuid: Uuid::new_v4(),
            world,
            received: Mutex::new(Vec::new()),
            failing_sends: AtomicU64::new(0),
        })
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Player for MockPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn world(&self) -> Arc<dyn BlockAccessor> {
        self.world.clone()
    }

    async fn send_message(&self, text: &str) -> Result<(), HostError> {
        if self
            .failing_sends
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(HostError::MessageUndelivered {
                player: self.name.clone(),
                reason: "disconnected".to_string(),
            });
        }
        self.received.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub fn context(bus: Arc<MockBus>, plugins_folder: &Path) -> Arc<Context> {
    Arc::new(Context::new(METADATA, bus, plugins_folder))
}

pub fn bone_meal_on(
    player: Arc<MockPlayer>,
    pos: BlockPos,
    block: Option<&str>,
) -> PlayerInteractBlockEvent {
    PlayerInteractBlockEvent::new(
        player,
        "minecraft:bone_meal",
        pos,
        block.map(str::to_string),
    )
}
