//! Application state for the API server

use crate::{Config, MediaTracker};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the tracker instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The main MediaTracker instance
    pub tracker: Arc<MediaTracker>,

    /// Configuration (for read access, runtime updates go through tracker)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(tracker: Arc<MediaTracker>, config: Arc<Config>) -> Self {
        Self { tracker, config }
    }
}
