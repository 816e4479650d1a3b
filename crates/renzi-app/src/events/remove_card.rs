use std::sync::Arc;

use kanal::AsyncSender;
use renzi_types::AppEvent;
use uuid::Uuid;

use crate::events::request_deck::deck_entries;
use crate::state::AppState;

/// Drop a card from the deck and push the refreshed deck to the
/// presentation loop. An unknown id removes nothing; the learned count
/// stays either way.
pub async fn handle_card_removal(
    state: Arc<AppState>,
    id: Uuid,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = {
        let mut progress = state.progress.write().await;
        progress.remove_flashcard(id);
        deck_entries(&progress)
    };

    tracing::info!("removed card {}, {} cards remain", id, entries.len());

    app_to_ui_tx.send(AppEvent::ShowDeck(entries)).await?;
    Ok(())
}
