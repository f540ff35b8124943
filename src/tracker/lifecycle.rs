//! Shutdown coordination.

use crate::error::Result;

use super::MediaTracker;

impl MediaTracker {
    /// Shut the tracker down
    ///
    /// Closes the search pool (if any) and the item database. In-flight store
    /// operations finish first; leased items simply stay `processing` and are
    /// picked up again after restart via reset or lease expiry.
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down tracker");

        if let Some(pool) = &self.search_pool {
            pool.close().await;
        }
        self.db.close().await;

        tracing::info!("Tracker shutdown complete");
        Ok(())
    }
}
