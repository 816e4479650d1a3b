use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_drop_dir() -> String {
    "uploads".to_string()
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WatcherConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory scanned for newly dropped images
    #[serde(default = "default_drop_dir")]
    pub drop_dir: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            drop_dir: default_drop_dir(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
