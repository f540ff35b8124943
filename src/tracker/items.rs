//! Item listing and mutation surface.

use crate::db;
use crate::error::{Error, ItemError, Result};
use crate::types::{ItemId, ItemInfo, ItemPatch};

use super::MediaTracker;

impl MediaTracker {
    /// List all tracked items, newest first
    pub async fn list_items(&self) -> Result<Vec<ItemInfo>> {
        let rows = self.db.list_items().await?;
        Ok(rows.into_iter().map(item_info).collect())
    }

    /// Get a single item by identity
    pub async fn get_item(&self, id: ItemId) -> Result<ItemInfo> {
        let row = self
            .db
            .get_item(id)
            .await?
            .ok_or(Error::Item(ItemError::NotFound { id: id.0 }))?;
        Ok(item_info(row))
    }

    /// Apply a partial update to an item's mutable fields
    ///
    /// Only `title` and `status` can change; no cross-field validation is
    /// performed. Re-statusing is how an operator requeues a stalled
    /// `processing` item.
    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<()> {
        let updated = self
            .db
            .update_item(id, patch.title.as_deref(), patch.status)
            .await?;
        if !updated {
            return Err(Error::Item(ItemError::NotFound { id: id.0 }));
        }

        tracing::info!(
            item_id = id.0,
            title = patch.title.as_deref(),
            status = patch.status.map(|s| s.as_str()),
            "Item updated"
        );

        Ok(())
    }

    /// Delete an item
    ///
    /// Removes the row only. A sprite file already on disk is deliberately
    /// left in place; orphan reconciliation belongs to an external
    /// collaborator.
    pub async fn delete_item(&self, id: ItemId) -> Result<()> {
        let deleted = self.db.delete_item(id).await?;
        if !deleted {
            return Err(Error::Item(ItemError::NotFound { id: id.0 }));
        }

        tracing::info!(item_id = id.0, "Item deleted");

        Ok(())
    }
}

/// Convert a database row into the wire-facing item shape
fn item_info(row: db::Item) -> ItemInfo {
    ItemInfo {
        id: ItemId(row.id),
        title: row.title,
        status: row.status,
        path: row.path,
        artifact_path: row.artifact_path,
        created_at: chrono::DateTime::from_timestamp(row.created_at, 0)
            .unwrap_or_else(chrono::Utc::now),
    }
}
