use std::path::PathBuf;
use std::sync::Arc;

use kanal::AsyncSender;
use renzi_lang_chinese::{ChineseProcessor, ChineseTranslator};
use renzi_ocr::OcrEngine;
use renzi_types::{AppEvent, TextSource};

use crate::events::text_input::process_text;
use crate::state::AppState;

/// Full upload pipeline: OCR the image, break the text into characters,
/// translate the whole of it.
pub async fn handle_image_upload(
    state: Arc<AppState>,
    path: PathBuf,
    processor: &ChineseProcessor,
    ocr_engine: Option<&OcrEngine>,
    translator: Option<&ChineseTranslator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(engine) = ocr_engine else {
        let _ = app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                status: "OCR is disabled".to_string(),
                processing: false,
            })
            .await;
        return Ok(());
    };

    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: format!("Processing {}...", path.display()),
            processing: true,
        })
        .await;

    match engine.recognize_file(&path).await {
        Ok(text) => {
            tracing::debug!("OCR produced {} chars", text.len());

            let _ = app_to_ui_tx
                .send(AppEvent::RawTextInput {
                    text: text.clone(),
                    source: TextSource::Ocr,
                })
                .await;

            let result = process_text(state, text, processor, translator, app_to_ui_tx).await?;
            tracing::info!(
                "image {} processed: {} characters recognized",
                path.display(),
                result.characters.len()
            );

            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Ready".to_string(),
                    processing: false,
                })
                .await;
        }
        Err(e) => {
            tracing::error!("recognition failed for {}: {}", path.display(), e);
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: format!("Recognition failed: {}", e),
                    processing: false,
                })
                .await;
        }
    }

    Ok(())
}
