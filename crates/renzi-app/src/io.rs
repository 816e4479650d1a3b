use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use renzi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Poll the drop directory and turn newly appearing image files into
/// upload events. Files already present at startup are not re-processed.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (enabled, drop_dir, poll_interval_ms) = {
        let config = state.config.read().await;
        (
            config.watcher.enabled,
            config.watcher.drop_dir.clone(),
            config.watcher.poll_interval_ms,
        )
    };

    if !enabled {
        tracing::info!("image watcher disabled");
        cancel.cancelled().await;
        return Ok(());
    }

    let dir = PathBuf::from(drop_dir);
    tokio::fs::create_dir_all(&dir).await?;
    tracing::info!("watching {} for image drops", dir.display());

    let mut seen: HashSet<PathBuf> = HashSet::new();
    collect_images(&dir, &mut seen).await?;

    let mut interval = tokio::time::interval(Duration::from_millis(poll_interval_ms));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("image watcher stopping");
                return Ok(());
            }
            _ = interval.tick() => {
                let mut fresh = HashSet::new();
                collect_images(&dir, &mut fresh).await?;

                for path in fresh {
                    if seen.insert(path.clone()) {
                        tracing::info!("new image dropped: {}", path.display());
                        event_tx.send(AppEvent::ImageUpload(path)).await?;
                    }
                }
            }
        }
    }
}

async fn collect_images(dir: &PathBuf, into: &mut HashSet<PathBuf>) -> anyhow::Result<()> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if renzi_ocr::is_supported_image(&path) {
            into.insert(path);
        }
    }
    Ok(())
}
