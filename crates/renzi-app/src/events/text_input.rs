use std::sync::Arc;

use kanal::AsyncSender;
use renzi_core::language::LanguageProcessor;
use renzi_lang_chinese::{ChineseProcessor, ChineseTranslator};
use renzi_types::{AppEvent, TranslationResult};

use crate::state::AppState;

pub async fn handle_text_input(
    state: Arc<AppState>,
    text: String,
    processor: &ChineseProcessor,
    translator: Option<&ChineseTranslator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let result = process_text(state, text, processor, translator, app_to_ui_tx).await?;
    tracing::debug!(
        "processed text: {} characters, translation {} chars",
        result.characters.len(),
        result.translated_text.len()
    );
    Ok(())
}

/// Shared lookup + translation pass: character breakdown first, then the
/// full-text translation, each pushed to the presentation loop as soon as
/// it is available.
pub async fn process_text(
    state: Arc<AppState>,
    text: String,
    processor: &ChineseProcessor,
    translator: Option<&ChineseTranslator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<TranslationResult> {
    let normalized = processor.normalize(&text);

    let characters = processor.character_details(&normalized);
    if characters.is_empty() {
        let _ = app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                status: "Chinese text only".to_string(),
                processing: false,
            })
            .await;
    } else {
        app_to_ui_tx
            .send(AppEvent::ShowResults(characters.clone()))
            .await?;
    }

    let translated_text = if let Some(t) = translator {
        let (from_lang, to_lang) = {
            let config = state.config.read().await;
            (
                config.translator.from_lang.clone(),
                config.translator.to_lang.clone(),
            )
        };

        // Fail-soft: the unavailable sentinel is a displayable string,
        // never an error
        let translated = t.translate_or_unavailable(&normalized, &to_lang).await;
        app_to_ui_tx
            .send(AppEvent::ShowTranslation {
                text: translated.clone(),
                from_lang,
                to_lang,
            })
            .await?;
        translated
    } else {
        String::new()
    };

    Ok(TranslationResult {
        original_text: normalized,
        translated_text,
        characters,
    })
}
