use std::sync::Arc;

use chrono::Utc;
use kanal::AsyncSender;
use renzi_types::AppEvent;

use crate::state::AppState;

/// Evaluated once per application session, at startup.
pub async fn handle_session_start(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (streak, cards_learned) = {
        let mut progress = state.progress.write().await;
        let streak = progress.update_streak(Utc::now());
        (streak, progress.stats().cards_learned)
    };

    tracing::info!("session started, streak is {}", streak);

    let _ = app_to_ui_tx
        .send(AppEvent::ShowStats {
            streak,
            cards_learned,
        })
        .await;

    Ok(())
}
