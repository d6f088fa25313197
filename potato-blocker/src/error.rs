use std::io;

use thiserror::Error;

use crate::plugin::api::HostError;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Host rejected the request: {0}")]
    Host(#[from] HostError),
    #[error("Failed to prepare plugin data folder: {0}")]
    DataFolder(#[from] io::Error),
}
