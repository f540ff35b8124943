//! Runtime configuration updates.

use crate::config::{Config, ConfigUpdate};

use super::MediaTracker;

impl MediaTracker {
    /// Apply runtime-changeable configuration updates
    ///
    /// Absent fields are left untouched. Changes take effect for subsequent
    /// requests; nothing is re-validated against in-flight work. A
    /// `lease_timeout_secs` of 0 disables lease expiry.
    pub async fn update_config(&self, update: ConfigUpdate) {
        if let Some(media_dir) = update.media_dir {
            tracing::info!(media_dir = %media_dir.display(), "Media directory updated");
            *self.runtime.media_dir.write().await = media_dir;
        }

        if let Some(worker_addr) = update.worker_addr {
            tracing::info!(worker_addr = %worker_addr, "Worker address updated");
            *self.runtime.worker_addr.write().await = worker_addr;
        }

        if let Some(secs) = update.lease_timeout_secs {
            let timeout = if secs == 0 { None } else { Some(secs) };
            tracing::info!(lease_timeout_secs = timeout, "Lease timeout updated");
            *self.runtime.lease_timeout_secs.write().await = timeout;
        }
    }

    /// Snapshot the effective configuration: the static config with the
    /// runtime-mutable fields merged in
    pub async fn current_config(&self) -> Config {
        let mut config = (*self.config).clone();
        config.storage.media_dir = self.runtime.media_dir.read().await.clone();
        config.jobs.worker_addr = self.runtime.worker_addr.read().await.clone();
        config.jobs.lease_timeout_secs = *self.runtime.lease_timeout_secs.read().await;
        config
    }
}
