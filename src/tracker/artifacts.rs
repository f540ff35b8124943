//! Sprite artifact commits.

use crate::error::{Error, ItemError, Result};
use crate::types::ItemId;

use super::MediaTracker;

/// Subdirectory of the media root reserved for generated sprites
pub(crate) const SPRITE_DIR: &str = "sprites";

/// Extension assumed when the uploaded filename carries none
const DEFAULT_EXTENSION: &str = "png";

impl MediaTracker {
    /// Commit a completed sprite artifact for an item
    ///
    /// The artifact is written to `<media_dir>/sprites/<id>.<ext>` before the
    /// item row is touched; a crash between the two steps leaves an orphan
    /// file, never a ready row pointing at a missing file. Identity-keyed
    /// naming means a re-commit for the same item overwrites the previous
    /// sprite instead of accumulating orphans.
    ///
    /// Fails with `NotFound` if the item does not exist — checked up front so
    /// a commit against an unknown id writes nothing to disk.
    ///
    /// Returns the artifact path relative to the media root, as stored on the
    /// item.
    pub async fn commit_artifact(
        &self,
        id: ItemId,
        bytes: &[u8],
        filename: &str,
    ) -> Result<String> {
        self.db
            .get_item(id)
            .await?
            .ok_or(Error::Item(ItemError::NotFound { id: id.0 }))?;

        let relative = artifact_relative_path(id, filename);
        let media_dir = self.runtime.media_dir.read().await.clone();

        let sprite_dir = media_dir.join(SPRITE_DIR);
        tokio::fs::create_dir_all(&sprite_dir).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create artifact directory '{}': {}",
                    sprite_dir.display(),
                    e
                ),
            ))
        })?;

        let dest = media_dir.join(&relative);
        tokio::fs::write(&dest, bytes).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write artifact '{}': {}", dest.display(), e),
            ))
        })?;

        let finalized = self.db.finalize_item(id, &relative).await?;
        if !finalized {
            // Deleted between the existence check and the update; the file
            // stays on disk and a future re-commit reuses the same name.
            return Err(Error::Item(ItemError::NotFound { id: id.0 }));
        }

        tracing::info!(
            item_id = id.0,
            artifact_path = %relative,
            size_bytes = bytes.len(),
            "Artifact committed"
        );

        Ok(relative)
    }
}

/// Deterministic artifact location for an item: `sprites/<id>.<ext>`, with
/// the extension taken from the uploaded filename (lowercased) or defaulted.
fn artifact_relative_path(id: ItemId, filename: &str) -> String {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    format!("{}/{}.{}", SPRITE_DIR, id.0, ext)
}
