use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_language() -> String {
    "chi_sim".to_string()
}

fn default_binary() -> String {
    "tesseract".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Tesseract language data set to recognize with
    #[serde(default = "default_language")]
    pub language: String,
    /// Tesseract binary to invoke
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            language: default_language(),
            binary: default_binary(),
        }
    }
}
