use std::sync::Arc;

use kanal::AsyncSender;
use renzi_core::ProgressStore;
use renzi_types::{AppEvent, DeckEntry};

use crate::state::AppState;

pub async fn handle_deck_request(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = {
        let progress = state.progress.read().await;
        deck_entries(&progress)
    };

    app_to_ui_tx.send(AppEvent::ShowDeck(entries)).await?;
    Ok(())
}

pub fn deck_entries(progress: &ProgressStore) -> Vec<DeckEntry> {
    progress
        .flashcards()
        .iter()
        .map(|card| DeckEntry {
            id: card.id,
            character: card.character.clone(),
            pinyin: card.pinyin.clone(),
            meaning: card.meaning.clone(),
            date_added: card.date_added,
        })
        .collect()
}
