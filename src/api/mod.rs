//! REST API server module
//!
//! Provides an OpenAPI 3.1 compliant REST API for registering media items,
//! handing sprite jobs to polling workers, committing finished artifacts,
//! and administering the tracker.

use crate::{Config, MediaTracker, Result};
use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Items
/// - `GET /items` - List all items (newest first)
/// - `GET /items/:id` - Get single item
/// - `PATCH /items/:id` - Update title/status
/// - `DELETE /items/:id` - Delete item (row only)
///
/// ## Tasks
/// - `POST /tasks/fetch` - Register a fetched media file
///
/// ## Jobs (worker-facing)
/// - `POST /jobs/next` - Lease the oldest eligible item (204 when idle)
/// - `POST /jobs/:id/done` - Upload the finished sprite (multipart)
///
/// ## Configuration
/// - `GET /config` - Get current config (auth token redacted)
/// - `PATCH /config` - Update runtime-changeable fields
///
/// ## Search
/// - `GET /search?q=` - Torrent-metadata search rendered as magnet links
///
/// ## System
/// - `GET /health` - Health check (always unauthenticated)
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive documentation (if enabled)
/// - `/admin` - Static admin UI files (if configured)
pub fn create_router(tracker: Arc<MediaTracker>, config: Arc<Config>) -> Router {
    let state = AppState::new(tracker, config.clone());

    // Everything stateful sits behind the shared-token gate
    let protected = Router::new()
        // Items
        .route("/items", get(routes::list_items))
        .route("/items/:id", get(routes::get_item))
        .route("/items/:id", patch(routes::update_item))
        .route("/items/:id", delete(routes::delete_item))
        // Tasks
        .route("/tasks/fetch", post(routes::fetch_task))
        // Jobs
        .route("/jobs/next", post(routes::next_job))
        .route("/jobs/:id/done", post(routes::complete_job))
        // Configuration
        .route("/config", get(routes::get_config))
        .route("/config", patch(routes::update_config))
        // Search
        .route("/search", get(routes::search));

    // Apply authentication middleware if an auth token is configured
    let protected = if config.api.auth_token.is_some() {
        protected.layer(middleware::from_fn_with_state(
            config.api.auth_token.clone(),
            auth::require_auth_token,
        ))
    } else {
        protected
    };

    // Health and API docs stay reachable without a token
    let router = protected
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (serves the spec on its
    // own internal path to avoid clashing with /openapi.json above)
    let router = if config.api.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    // Serve the static admin UI if a directory is configured
    let router = match &config.api.admin_dir {
        Some(dir) => router.nest_service("/admin", ServeDir::new(dir)),
        None => router,
    };

    // Add state to all routes
    let router = router.with_state(state);

    // Apply CORS middleware if enabled in config
    if config.api.cors_enabled {
        let cors = build_cors_layer(&config.api.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// Origins support "*" for any origin; all methods and headers are allowed
/// for cross-origin requests either way.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// Creates a TCP listener, binds it to the configured address, and serves the
/// API router until the server is shut down.
///
/// # Example
///
/// ```no_run
/// use seedbox_dl::{MediaTracker, Config};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let tracker = Arc::new(MediaTracker::new((*config).clone()).await?);
///
/// // Start API server (blocks until shutdown)
/// seedbox_dl::api::start_api_server(tracker, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(tracker: Arc<MediaTracker>, config: Arc<Config>) -> Result<()> {
    let bind_address = config.api.bind_address;

    tracing::info!(
        address = %bind_address,
        "Starting API server"
    );

    let app = create_router(tracker, config).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(
        address = %bind_address,
        "API server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
