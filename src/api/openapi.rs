//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the seedbox-dl REST API
//! using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the seedbox-dl REST API
///
/// This struct is used to generate the OpenAPI 3.1 specification that describes
/// all available endpoints, request/response types, and API behavior.
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "seedbox-dl REST API",
        version = "0.1.0",
        description = "REST API for tracking downloaded media items and coordinating preview-sprite generation by polling workers",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:28000", description = "Local development server")
    ),
    paths(
        // Items
        crate::api::routes::list_items,
        crate::api::routes::get_item,
        crate::api::routes::update_item,
        crate::api::routes::delete_item,

        // Tasks
        crate::api::routes::fetch_task,

        // Jobs
        crate::api::routes::next_job,
        crate::api::routes::complete_job,

        // Configuration
        crate::api::routes::get_config,
        crate::api::routes::update_config,

        // Search
        crate::api::routes::search,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::ItemId,
        crate::types::Status,
        crate::types::ItemInfo,
        crate::types::ItemPatch,
        crate::types::LeasedJob,
        crate::types::SearchResult,

        // Config types from config.rs
        crate::config::Config,
        crate::config::ConfigUpdate,
        crate::config::StorageConfig,
        crate::config::ApiConfig,
        crate::config::SearchConfig,
        crate::config::JobsConfig,

        // Request/response types from routes
        crate::api::routes::FetchRequest,
        crate::api::routes::FetchResponse,
        crate::api::routes::CommitResponse,
        crate::api::routes::SearchQuery,

        // Error envelope
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "items", description = "Item listing and mutation"),
        (name = "tasks", description = "Item registration"),
        (name = "jobs", description = "Worker-facing lease and commit"),
        (name = "config", description = "Configuration"),
        (name = "search", description = "Torrent-metadata search proxy"),
        (name = "system", description = "Health and documentation"),
    )
)]
pub struct ApiDoc;
