use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use renzi_lang_chinese::{ChineseProcessor, ChineseTranslator};
use renzi_ocr::OcrEngine;
use renzi_translator::Translator;
use renzi_types::AppEvent;

use crate::state::AppState;

pub mod create_card;
pub mod image_upload;
pub mod remove_card;
pub mod request_deck;
pub mod session_start;
pub mod text_input;

use create_card::handle_card_creation;
use image_upload::handle_image_upload;
use remove_card::handle_card_removal;
use request_deck::handle_deck_request;
use session_start::handle_session_start;
use text_input::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let processor = ChineseProcessor::new();

    // Initialize OCR engine
    let ocr_engine = {
        let config = state.config.read().await;
        if config.ocr.enabled {
            Some(OcrEngine::with_binary(
                &config.ocr.binary,
                &config.ocr.language,
            ))
        } else {
            tracing::warn!("OCR disabled, image uploads will be rejected");
            None
        }
    };

    // Initialize translator
    let translator = {
        let config = state.config.read().await;
        if config.translator.enabled {
            Some(ChineseTranslator::new(config.translator.api_url.clone()))
        } else {
            None
        }
    };

    // The target language comes from a fixed selector set; anything else
    // falls back to English.
    if let Some(t) = &translator {
        let to_lang = {
            let config = state.config.read().await;
            config.translator.to_lang.clone()
        };
        let supported = t
            .supported_languages()
            .iter()
            .any(|(_, to)| *to == to_lang);
        if !supported {
            tracing::warn!(
                "unsupported target language '{}', falling back to 'en'",
                to_lang
            );
            state.config.write().await.translator.to_lang = "en".to_string();
        }
    }

    let _ = app_to_ui_tx.send(AppEvent::BackendReady).await;

    tracing::info!("event loop started, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_events(
            state.clone(),
            &processor,
            ocr_engine.as_ref(),
            translator.as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    processor: &ChineseProcessor,
    ocr_engine: Option<&OcrEngine>,
    translator: Option<&ChineseTranslator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::SessionStart => {
            handle_session_start(state, app_to_ui_tx).await?;
        }
        AppEvent::ImageUpload(path) => {
            handle_image_upload(state, path, processor, ocr_engine, translator, app_to_ui_tx)
                .await?;
        }
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} chars", text.len());
            handle_text_input(state, text, processor, translator, app_to_ui_tx).await?;
        }
        AppEvent::CreateCard(detail) => {
            handle_card_creation(state, detail, app_to_ui_tx).await?;
        }
        AppEvent::RemoveCard(id) => {
            handle_card_removal(state, id, app_to_ui_tx).await?;
        }
        AppEvent::RequestDeck => {
            handle_deck_request(state, app_to_ui_tx).await?;
        }
        AppEvent::RawTextInput { .. }
        | AppEvent::ShowResults(_)
        | AppEvent::ShowTranslation { .. }
        | AppEvent::ShowDeck(_)
        | AppEvent::ShowStats { .. }
        | AppEvent::StatusUpdate { .. }
        | AppEvent::BackendReady => {
            // UI-bound events, nothing to do in the backend
        }
    }

    Ok(())
}
