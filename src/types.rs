//! Core types for seedbox-dl
//!
//! Defines the item identifier, the item status state machine, and the
//! wire-facing types shared between the tracker and the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a tracked item
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Create a new ItemId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Implement sqlx Type, Encode, and Decode for database operations
impl sqlx::Type<sqlx::Sqlite> for ItemId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for ItemId {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::Encode::<sqlx::Sqlite>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for ItemId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let id = <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self(id))
    }
}

/// Item lifecycle status
///
/// The forward-only path is `{downloaded, pending, pending-preview}` →
/// `processing` → `ready`. The three awaiting-lease statuses are
/// interchangeable for eligibility purposes. There is no failed status:
/// a stalled `processing` item is reset to an awaiting-lease status through
/// the item mutation surface to re-enter the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Source media fetched, awaiting lease
    Downloaded,
    /// Awaiting lease (externally assigned)
    Pending,
    /// Awaiting lease, flagged for preview regeneration
    PendingPreview,
    /// Leased to a worker, sprite generation in flight
    Processing,
    /// Terminal: sprite artifact present
    Ready,
}

impl Status {
    /// The stored string representation of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Downloaded => "downloaded",
            Status::Pending => "pending",
            Status::PendingPreview => "pending-preview",
            Status::Processing => "processing",
            Status::Ready => "ready",
        }
    }

    /// Parse a stored status string; None for anything outside the enum
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "downloaded" => Some(Status::Downloaded),
            "pending" => Some(Status::Pending),
            "pending-preview" => Some(Status::PendingPreview),
            "processing" => Some(Status::Processing),
            "ready" => Some(Status::Ready),
            _ => None,
        }
    }

    /// Whether this status makes an item eligible for leasing
    pub fn is_awaiting_lease(&self) -> bool {
        matches!(
            self,
            Status::Downloaded | Status::Pending | Status::PendingPreview
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Status is persisted as TEXT; Encode/Decode mirror the stored strings so
// row structs can carry the enum directly.
impl sqlx::Type<sqlx::Sqlite> for Status {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <&str as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Status {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::Encode::<sqlx::Sqlite>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Status {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Status::parse(s).ok_or_else(|| format!("unknown item status '{}'", s).into())
    }
}

/// Tracked item as returned by the API (newest first in listings)
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemInfo {
    /// Unique item identifier
    pub id: ItemId,

    /// Display title (defaults to the base name of the source path)
    pub title: String,

    /// Current lifecycle status
    pub status: Status,

    /// Path to the source media file; set once at creation
    pub path: String,

    /// Relative path to the generated sprite; present only when ready
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_path: Option<String>,

    /// Creation timestamp; sole ordering key for lease selection
    pub created_at: DateTime<Utc>,
}

/// A claimed sprite-generation job handed to a polling worker
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LeasedJob {
    /// The claimed item's identifier
    pub id: ItemId,

    /// Path to the source media file the worker should process
    pub path: String,
}

/// Partial update for a tracked item
///
/// Absent fields are left untouched; `Option` presence is the explicit
/// per-field flag. Status strings outside the enum are rejected at
/// deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ItemPatch {
    /// New display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New lifecycle status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl ItemPatch {
    /// Whether the patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}

/// A single torrent-metadata search hit rendered as a magnet link
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    /// Torrent display name
    pub title: String,

    /// `magnet:?xt=urn:btih:...` URI for the hit
    pub magnet: String,
}
