//! Atomic lease claim and artifact finalization.

use crate::error::DatabaseError;
use crate::types::ItemId;
use crate::{Error, Result};

use super::{Database, LeasedRow};

impl Database {
    /// Atomically claim the oldest leasable item
    ///
    /// Eligible rows are those with no artifact whose status is in the
    /// awaiting-lease set, plus `processing` rows whose `leased_at` is at or
    /// before `expired_cutoff` (lease expiry; pass None to never reclaim).
    /// Ordered by `created_at` ascending, `id` ascending as the tie-break.
    ///
    /// The select and the claim are a single UPDATE with a scalar subquery.
    /// SQLite executes the whole statement under its exclusive writer lock,
    /// so two concurrent callers can never both observe and claim the same
    /// row — the loser either blocks until the winner commits or finds no
    /// eligible row. Returns None when no work is available; nothing is
    /// mutated in that case.
    pub async fn lease_next_item(
        &self,
        now: i64,
        expired_cutoff: Option<i64>,
    ) -> Result<Option<LeasedRow>> {
        let row = sqlx::query_as::<_, LeasedRow>(
            r#"
            UPDATE items
            SET status = 'processing', leased_at = ?
            WHERE id = (
                SELECT id FROM items
                WHERE artifact_path IS NULL
                  AND (
                    status IN ('downloaded', 'pending', 'pending-preview')
                    OR (status = 'processing' AND leased_at IS NOT NULL AND leased_at <= ?)
                  )
                ORDER BY created_at ASC, id ASC
                LIMIT 1
            )
            RETURNING id, path
            "#,
        )
        .bind(now)
        .bind(expired_cutoff)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to lease next item: {}",
                e
            )))
        })?;

        Ok(row)
    }

    /// Finalize a committed artifact: set the artifact path and transition to
    /// `ready` in a single atomic update
    ///
    /// Returns false if the item does not exist (zero rows affected).
    pub async fn finalize_item(&self, id: ItemId, artifact_path: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET status = 'ready', artifact_path = ?, leased_at = NULL
            WHERE id = ?
            "#,
        )
        .bind(artifact_path)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to finalize item: {}",
                e
            )))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
