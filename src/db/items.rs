//! Item CRUD operations.

use crate::error::DatabaseError;
use crate::types::{ItemId, Status};
use crate::{Error, Result};

use super::{Database, Item, NewItem};

impl Database {
    /// Insert a new item record
    pub async fn insert_item(&self, item: &NewItem) -> Result<ItemId> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO items (title, status, path, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&item.title)
        .bind(item.status)
        .bind(&item.path)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to insert item: {}",
                e
            )))
        })?;

        Ok(ItemId(result.last_insert_rowid()))
    }

    /// Get an item by ID
    pub async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, status, path, artifact_path, created_at, leased_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to get item: {}",
                e
            )))
        })?;

        Ok(row)
    }

    /// List all items, newest first
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, status, path, artifact_path, created_at, leased_at
            FROM items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to list items: {}",
                e
            )))
        })?;

        Ok(rows)
    }

    /// Patch an item's mutable fields (title, status)
    ///
    /// Absent fields are left untouched. Returns false if the item does not
    /// exist.
    pub async fn update_item(
        &self,
        id: ItemId,
        title: Option<&str>,
        status: Option<Status>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET title = COALESCE(?, title),
                status = COALESCE(?, status)
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to update item: {}",
                e
            )))
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an item
    ///
    /// Removes the row only; any artifact file on disk is left for an
    /// external collaborator to reconcile. Returns false if the item does not
    /// exist.
    pub async fn delete_item(&self, id: ItemId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                Error::Database(DatabaseError::QueryFailed(format!(
                    "Failed to delete item: {}",
                    e
                )))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
