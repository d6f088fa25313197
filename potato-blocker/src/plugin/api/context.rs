use std::{fs, io, path::PathBuf, sync::Arc};

use crate::plugin::PluginMetadata;

use super::{
    EventBus, EventHandler, EventPriority, HostError, ListenerId,
    events::player_interact_block::PlayerInteractBlockEvent,
};

/// The `Context` struct represents what the host hands a plugin: its
/// metadata, the event bus, and the folder it may keep files in.
pub struct Context {
    metadata: PluginMetadata<'static>,
    pub event_bus: Arc<dyn EventBus>,
    plugins_folder: PathBuf,
}

impl Context {
    /// Creates a new instance of `Context`.
    ///
    /// # Arguments
    /// - `metadata`: The metadata of the plugin.
    /// - `event_bus`: The host's event dispatcher.
    /// - `plugins_folder`: Directory holding one data folder per plugin.
    #[must_use]
    pub fn new(
        metadata: PluginMetadata<'static>,
        event_bus: Arc<dyn EventBus>,
        plugins_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            metadata,
            event_bus,
            plugins_folder: plugins_folder.into(),
        }
    }

    #[must_use]
    pub fn metadata(&self) -> &PluginMetadata<'static> {
        &self.metadata
    }

    /// Retrieves the data folder path for the plugin, creating it if it does not exist.
    pub fn get_data_folder(&self) -> io::Result<PathBuf> {
        let path = self.plugins_folder.join(self.metadata.name);
        if !path.exists() {
            fs::create_dir_all(&path)?;
        }
        Ok(path)
    }

    /// Registers a handler for block interactions.
    ///
    /// # Arguments
    /// - `handler`: A reference to the event handler.
    /// - `priority`: The priority of the event handler.
    /// - `blocking`: Whether the handler runs before the host acts and may cancel.
    pub async fn register_event<H>(
        &self,
        handler: Arc<H>,
        priority: EventPriority,
        blocking: bool,
    ) -> Result<ListenerId, HostError>
    where
        H: EventHandler<PlayerInteractBlockEvent> + 'static,
    {
        self.event_bus
            .register_interact_listener(handler, priority, blocking)
            .await
    }

    pub async fn unregister_event(&self, listener: ListenerId) -> Result<(), HostError> {
        self.event_bus.remove_listener(listener).await
    }
}
