use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Install the plugin's own logger. Disable when the host already routes
    /// this plugin's `log` records.
    pub enabled: bool,
    pub timestamp: bool,
    pub color: bool,
    pub threads: bool,
    /// Also write `logs/latest.log` inside the plugin data folder.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timestamp: true,
            color: true,
            threads: false,
            file: true,
        }
    }
}
