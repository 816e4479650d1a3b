use std::sync::Arc;

use kanal::AsyncSender;
use renzi_core::Flashcard;
use renzi_types::{AppEvent, CharacterDetail};

use crate::state::AppState;

/// Mint a flashcard from a looked-up character and save it to the deck.
/// The id and timestamp are generated here, at save time.
pub async fn handle_card_creation(
    state: Arc<AppState>,
    detail: CharacterDetail,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let card = Flashcard::new(detail.character, detail.pinyin, detail.meaning);
    let character = card.character.clone();
    let card_id = card.id;

    let (streak, cards_learned) = {
        let mut progress = state.progress.write().await;
        progress.add_flashcard(card);
        (progress.stats().streak, progress.stats().cards_learned)
    };

    tracing::info!("saved card {} for {}", card_id, character);

    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: format!("Saved {} to the deck", character),
            processing: false,
        })
        .await;
    let _ = app_to_ui_tx
        .send(AppEvent::ShowStats {
            streak,
            cards_learned,
        })
        .await;

    Ok(())
}
