//! Denies bone meal on potato crops.

use std::sync::Arc;

use async_trait::async_trait;
use potato_blocker_config::{BlockerConfig, CONFIG_FILE_NAME, ConfigSource};
use potato_blocker_util::text::{fill_placeholders, strip_formatting};

use crate::error::PluginError;
use crate::lang::{MessageKey, MessageStore};
use crate::logging;
use crate::plugin::Plugin;
use crate::plugin::api::events::player_interact_block::PlayerInteractBlockEvent;
use crate::plugin::api::{Cancellable, Context, EventHandler, EventPriority, ListenerId};
use crate::stats::BlockedCounter;

pub const BONE_MEAL_ITEM: &str = "minecraft:bone_meal";
pub const POTATO_BLOCK: &str = "minecraft:potatoes";

pub fn is_bone_meal(item: &str) -> bool {
    item == BONE_MEAL_ITEM
}

pub fn is_potato_crop(block: &str) -> bool {
    block == POTATO_BLOCK
}

/// Cancels bone meal interactions with potato crops.
pub struct InteractBlockHandler {
    messages: Arc<MessageStore>,
    blocked: Arc<BlockedCounter>,
}

impl InteractBlockHandler {
    pub fn new(messages: Arc<MessageStore>, blocked: Arc<BlockedCounter>) -> Self {
        Self { messages, blocked }
    }

    async fn notify_player(&self, event: &PlayerInteractBlockEvent) {
        // A failed send does not stop the next one
        for text in [self.messages.blocked_message(), self.messages.info_message()] {
            if let Err(e) = event.player.send_message(text).await {
                log::debug!(
                    "Error sending \"{}\" to player: {e}",
                    strip_formatting(text)
                );
            }
        }
    }

    fn log_blocked_attempt(&self, event: &PlayerInteractBlockEvent) {
        let pos = event.block_pos;
        log::info!(
            "{}",
            fill_placeholders(
                self.messages.message(MessageKey::BlockedAttemptLog),
                &[&event.player.name(), &pos.x(), &pos.y(), &pos.z()],
            )
        );
    }
}

#[async_trait]
impl EventHandler<PlayerInteractBlockEvent> for InteractBlockHandler {
    async fn handle_blocking(&self, event: &mut PlayerInteractBlockEvent) {
        if !is_bone_meal(&event.item) {
            return;
        }

        let block = match &event.block {
            Some(block) => block.clone(),
            None => match event.player.world().get_block_name(&event.block_pos).await {
                Ok(block) => block,
                Err(e) => {
                    log::debug!("Could not process block interaction: {e}");
                    return;
                }
            },
        };
        if !is_potato_crop(&block) {
            return;
        }

        event.set_cancelled(true);
        self.notify_player(event).await;
        self.log_blocked_attempt(event);
        let total = self.blocked.increment();
        log::debug!(
            "Blocked attempt #{total} by {} ({})",
            event.player.name(),
            event.player.uuid()
        );
    }
}

/// The plugin: owns the message store and counter, and keeps the interact
/// listener registered while enabled.
pub struct PotatoBlocker {
    messages: Arc<MessageStore>,
    blocked: Arc<BlockedCounter>,
    listener: Option<ListenerId>,
}

impl Default for PotatoBlocker {
    fn default() -> Self {
        Self::new()
    }
}

impl PotatoBlocker {
    pub fn new() -> Self {
        Self::with_messages(Arc::new(MessageStore::new()))
    }

    pub fn with_messages(messages: Arc<MessageStore>) -> Self {
        Self {
            messages,
            blocked: Arc::new(BlockedCounter::new()),
            listener: None,
        }
    }

    pub fn messages(&self) -> &Arc<MessageStore> {
        &self.messages
    }

    pub fn blocked_count(&self) -> u64 {
        self.blocked.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.listener.is_some()
    }
}

#[async_trait]
impl Plugin for PotatoBlocker {
    async fn on_load(&mut self, context: Arc<Context>) -> Result<(), PluginError> {
        let data_folder = context.get_data_folder()?;
        let config_path = data_folder.join(CONFIG_FILE_NAME);
        let loaded = BlockerConfig::load(&config_path);
        let config = loaded
            .as_ref()
            .map(|(config, _)| config.clone())
            .unwrap_or_default();

        logging::init_logger(&config.logging, &data_folder);
        match loaded {
            Ok((_, ConfigSource::File)) => {
                log::debug!("Loaded config from {}", config_path.display());
            }
            Ok((_, ConfigSource::CreatedDefault)) => {
                log::info!("Created default config at {}", config_path.display());
            }
            Err(e) => log::warn!("{e}; using default config"),
        }

        self.messages.set_language(config.language);
        log::debug!(
            "Using language {} ({})",
            config.language,
            config.language.display_name()
        );

        log::info!("{}", self.messages.loading_message());
        log::info!("{}", self.messages.compatibility_message());
        log::info!("{}", self.messages.message(MessageKey::Optimization));
        Ok(())
    }

    async fn on_enable(&mut self, context: Arc<Context>) -> Result<(), PluginError> {
        if let Some(listener) = self.listener {
            log::debug!("Event listener {listener} already registered");
            return Ok(());
        }

        log::info!("Enabling Potato Bone Meal Blocker...");
        let handler = Arc::new(InteractBlockHandler::new(
            self.messages.clone(),
            self.blocked.clone(),
        ));
        let listener = context
            .register_event(handler, EventPriority::Normal, true)
            .await
            .inspect_err(|e| log::error!("Failed to register event listener: {e}"))?;
        self.listener = Some(listener);

        log::info!("{}", self.messages.enabled_message());
        log::info!("{}", self.messages.message(MessageKey::ListenerRegistered));
        Ok(())
    }

    async fn on_disable(&mut self, context: Arc<Context>) -> Result<(), PluginError> {
        log::info!("Disabling Potato Bone Meal Blocker...");

        let mut result = Ok(());
        if let Some(listener) = self.listener.take() {
            match context.unregister_event(listener).await {
                Ok(()) => log::info!("Event listener unregistered successfully"),
                Err(e) => {
                    log::error!(
                        "{}: {e}",
                        self.messages.message(MessageKey::ErrorGeneric)
                    );
                    result = Err(e.into());
                }
            }
        }

        let blocked = self.blocked_count();
        if blocked > 0 {
            log::info!("Total bone meal attempts blocked on potatoes: {blocked}");
        }

        log::info!("{}", self.messages.message(MessageKey::Disabled));
        result
    }
}
