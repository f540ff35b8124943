//! Read-only full-text search proxy against the external torrent-metadata
//! database.

use crate::error::{Error, Result};
use crate::types::SearchResult;
use sqlx::FromRow;

use super::MediaTracker;

/// Row shape returned by the metadata database
#[derive(FromRow)]
struct TorrentRow {
    hash: String,
    name: String,
}

impl MediaTracker {
    /// Search torrent metadata by name and render each hit as a magnet link
    ///
    /// Purely read-only; the metadata database is owned by an external
    /// collaborator. Fails with `SearchUnavailable` when no search database
    /// is configured.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let Some(pool) = &self.search_pool else {
            return Err(Error::SearchUnavailable);
        };

        let rows = sqlx::query_as::<_, TorrentRow>(
            r#"
            SELECT encode(info_hash, 'hex') AS hash, name
            FROM torrents
            WHERE name ILIKE '%' || $1 || '%'
            LIMIT 20
            "#,
        )
        .bind(query)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let magnet = format!(
                    "magnet:?xt=urn:btih:{}&dn={}",
                    row.hash,
                    urlencoding::encode(&row.name)
                );
                SearchResult {
                    title: row.name,
                    magnet,
                }
            })
            .collect())
    }
}
