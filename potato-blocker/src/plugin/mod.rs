use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PluginError;

pub mod api;

use api::Context;

/// Identifies a plugin to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMetadata<'s> {
    pub name: &'s str,
    pub version: &'s str,
    pub authors: &'s str,
    pub description: &'s str,
}

/// Lifecycle the host drives a plugin through: load once, then any number of
/// enable/disable pairs. `Ok` is reported to the host as success.
#[async_trait]
pub trait Plugin: Send + Sync + 'static {
    async fn on_load(&mut self, _context: Arc<Context>) -> Result<(), PluginError> {
        Ok(())
    }

    async fn on_enable(&mut self, _context: Arc<Context>) -> Result<(), PluginError> {
        Ok(())
    }

    async fn on_disable(&mut self, _context: Arc<Context>) -> Result<(), PluginError> {
        Ok(())
    }
}
