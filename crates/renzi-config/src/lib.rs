use std::env;

use serde::{Deserialize, Serialize};

use self::ocr::OcrConfig;
use self::translator::TranslatorConfig;
use self::watcher::WatcherConfig;

pub mod ocr;
pub mod translator;
pub mod watcher;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub translator: TranslatorConfig,
    pub watcher: WatcherConfig,

    /// App main loop delta time
    pub delta_time: u64,
}

impl Config {
    pub fn new() -> Self {
        let delta_time = env::var("DELTA_TIME_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(250); // 250ms default

        let mut config = Config {
            ocr: OcrConfig::default(),
            translator: TranslatorConfig::default(),
            watcher: WatcherConfig::default(),
            delta_time,
        };

        if let Ok(dir) = env::var("WATCH_DIR") {
            config.watcher.drop_dir = dir;
        }

        if let Ok(lang) = env::var("TARGET_LANG") {
            config.translator.to_lang = lang;
        }

        if let Ok(url) = env::var("TRANSLATION_API_URL") {
            config.translator.api_url = url;
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
