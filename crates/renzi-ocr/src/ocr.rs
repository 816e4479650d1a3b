use std::path::Path;

use tokio::process::Command;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff"];

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("no Chinese text detected in the image")]
    NoText,

    #[error("OCR engine failed: {0}")]
    Engine(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Recognizes text in image files by driving the tesseract binary.
pub struct OcrEngine {
    binary: String,
    language: String,
}

impl OcrEngine {
    /// Create a new OCR engine for the specified tesseract language data
    /// set (e.g., "chi_sim", "eng")
    pub fn new(language_code: &str) -> Self {
        Self::with_binary("tesseract", language_code)
    }

    pub fn with_binary(binary: &str, language_code: &str) -> Self {
        Self {
            binary: binary.to_string(),
            language: language_code.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Recognize text from an image file. Whitespace-only output counts as
    /// a recognition failure, not an empty success.
    pub async fn recognize_file(&self, path: &Path) -> Result<String, RecognitionError> {
        tracing::debug!("running {} on {}", self.binary, path.display());

        let output = Command::new(&self.binary)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::Engine(format!(
                "exit status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        ensure_recognized(text)
    }
}

/// Whether the watcher should treat this file as an uploadable image.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn ensure_recognized(text: String) -> Result<String, RecognitionError> {
    if text.trim().is_empty() {
        return Err(RecognitionError::NoText);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn whitespace_only_output_is_no_text() {
        assert!(matches!(
            ensure_recognized("  \n\t ".to_string()),
            Err(RecognitionError::NoText)
        ));
    }

    #[test]
    fn recognized_text_passes_through_untrimmed() {
        let text = ensure_recognized("你好\n".to_string()).unwrap();
        assert_eq!(text, "你好\n");
    }

    #[test]
    fn image_extensions_are_filtered_case_insensitively() {
        assert!(is_supported_image(&PathBuf::from("uploads/menu.PNG")));
        assert!(is_supported_image(&PathBuf::from("uploads/sign.jpeg")));
        assert!(!is_supported_image(&PathBuf::from("uploads/notes.txt")));
        assert!(!is_supported_image(&PathBuf::from("uploads/no_extension")));
    }
}
