//! Potato Bone Meal Blocker: stops players from using bone meal on potato
//! crops and tells them why, in their server's language.

pub mod blocker;
pub mod error;
pub mod lang;
pub mod logging;
pub mod plugin;
pub mod stats;

pub use blocker::PotatoBlocker;
pub use error::PluginError;
pub use lang::{MessageKey, MessageStore};

#[unsafe(no_mangle)]
pub static METADATA: plugin::PluginMetadata = plugin::PluginMetadata {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    authors: env!("CARGO_PKG_AUTHORS"),
    description: env!("CARGO_PKG_DESCRIPTION"),
};

/// Entry point the host loader resolves after opening the library.
#[unsafe(no_mangle)]
pub fn plugin() -> Box<dyn plugin::Plugin> {
    Box::new(PotatoBlocker::new())
}
