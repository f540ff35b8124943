//! Configuration types for seedbox-dl

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use utoipa::ToSchema;

/// Storage configuration (media root and item database)
///
/// Groups settings related to where media files, generated sprites, and the
/// item database live. Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageConfig {
    /// Media content root; generated sprites land under `<media_dir>/sprites/`
    /// (default: "./media")
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,

    /// Path to the SQLite item database (default: "./seedbox-dl.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_dir: default_media_dir(),
            database_path: default_database_path(),
        }
    }
}

/// REST API configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Bind address for the API server (default: 127.0.0.1:28000)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Shared worker/client token; when set, requests must carry a matching
    /// X-Auth header (None = no authentication)
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Enable CORS (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins ("*" = any; default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Serve interactive Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,

    /// Directory of static admin UI files served under /admin
    /// (None = admin UI disabled)
    #[serde(default)]
    pub admin_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            auth_token: None,
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
            admin_dir: None,
        }
    }
}

/// Read-only torrent-metadata search proxy configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchConfig {
    /// PostgreSQL connection string for the external torrent-metadata
    /// database (None = search disabled)
    #[serde(default)]
    pub database_url: Option<String>,
}

/// Sprite job coordination configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JobsConfig {
    /// Address of the sprite worker node, advertised to admin clients
    /// (default: "http://localhost:9001")
    #[serde(default = "default_worker_addr")]
    pub worker_addr: String,

    /// Lease timeout in seconds for reclaiming items whose worker died
    /// mid-processing (None = leases never expire, matching the classic
    /// behavior; items then stay `processing` until manually reset)
    #[serde(default)]
    pub lease_timeout_secs: Option<u64>,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            worker_addr: default_worker_addr(),
            lease_timeout_secs: None,
        }
    }
}

/// Top-level configuration for seedbox-dl
///
/// Every field has a sensible default; `Config::default()` yields a working
/// local setup with no authentication and no search proxy.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// REST API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Search proxy configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Sprite job coordination configuration
    #[serde(default)]
    pub jobs: JobsConfig,
}

/// Runtime-changeable configuration fields
///
/// Carried by `PATCH /config`; absent fields are left untouched. Fields that
/// require a restart (bind address, database path, auth token) are
/// deliberately not here.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ConfigUpdate {
    /// New media content root for future artifact commits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,

    /// New advertised worker address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_addr: Option<String>,

    /// New lease timeout in seconds; 0 disables lease expiry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_timeout_secs: Option<u64>,
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("./media")
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./seedbox-dl.db")
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 28000))
}

fn default_worker_addr() -> String {
    "http://localhost:9001".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}
