//! Shared helpers for tracker and API tests.

use crate::config::Config;
use crate::tracker::MediaTracker;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a tracker over a fresh temporary directory
///
/// Media root and item database both live inside the returned TempDir; the
/// guard must be kept alive for the duration of the test.
pub(crate) async fn create_test_tracker() -> (Arc<MediaTracker>, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.storage.media_dir = temp_dir.path().join("media");
    config.storage.database_path = temp_dir.path().join("items.db");

    let tracker = MediaTracker::new(config).await.unwrap();
    (Arc::new(tracker), temp_dir)
}

/// Same as [`create_test_tracker`] but with a caller-tweaked config
///
/// The closure receives the config after the temporary paths are set.
pub(crate) async fn create_test_tracker_with<F>(tweak: F) -> (Arc<MediaTracker>, TempDir)
where
    F: FnOnce(&mut Config),
{
    let temp_dir = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.storage.media_dir = temp_dir.path().join("media");
    config.storage.database_path = temp_dir.path().join("items.db");
    tweak(&mut config);

    let tracker = MediaTracker::new(config).await.unwrap();
    (Arc::new(tracker), temp_dir)
}
