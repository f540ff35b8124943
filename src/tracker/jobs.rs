//! Job leasing for polling sprite workers.

use crate::error::Result;
use crate::types::LeasedJob;

use super::MediaTracker;

impl MediaTracker {
    /// Claim the oldest eligible item for a polling worker
    ///
    /// Oldest-first by creation time; an item is eligible while its status is
    /// in the awaiting-lease set and it has no artifact. With a lease timeout
    /// configured, `processing` items whose lease is older than the timeout
    /// are reclaimed too.
    ///
    /// Returns `Ok(None)` when no work is available; that is the normal empty
    /// result, not an error, and nothing is mutated. Once an item is handed
    /// out it will not be handed out again until it is finalized, reset
    /// through the mutation surface, or (with a timeout) its lease expires.
    pub async fn lease_next(&self) -> Result<Option<LeasedJob>> {
        let now = chrono::Utc::now().timestamp();
        let cutoff = self
            .runtime
            .lease_timeout_secs
            .read()
            .await
            .map(|secs| now - secs as i64);

        match self.db.lease_next_item(now, cutoff).await? {
            Some(row) => {
                tracing::info!(item_id = row.id.0, path = %row.path, "Job leased");
                Ok(Some(LeasedJob {
                    id: row.id,
                    path: row.path,
                }))
            }
            None => Ok(None),
        }
    }
}
