//! Draft cache row operations.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{CacheResultExt, Result},
    models::{CachedDraft, Draft},
};

const UPSERT_DRAFT_SQL: &str = "INSERT INTO drafts (key, owner_id, status, cache_only, document, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(key) DO UPDATE SET owner_id = ?2, status = ?3, cache_only = ?4, document = ?5, updated_at = ?6";
const SELECT_DRAFT_SQL: &str = "SELECT document, cache_only FROM drafts WHERE key = ?1";
const SELECT_ALL_DRAFTS_SQL: &str = "SELECT document, cache_only FROM drafts";
const DELETE_DRAFT_SQL: &str = "DELETE FROM drafts WHERE key = ?1";

impl super::CacheDb {
    /// Inserts or replaces the row for a cache key.
    pub(super) fn upsert_draft(&self, key: &str, draft: &Draft, cache_only: bool) -> Result<()> {
        let document = serde_json::to_string(draft)?;

        self.connection
            .execute(
                UPSERT_DRAFT_SQL,
                params![
                    key,
                    &draft.owner_id,
                    draft.status.as_str(),
                    cache_only,
                    document,
                    draft.updated_at.to_string(),
                ],
            )
            .cache_context("Failed to upsert draft")?;

        Ok(())
    }

    /// Reads one row by key.
    pub(super) fn get_draft(&self, key: &str) -> Result<Option<CachedDraft>> {
        let row: Option<(String, bool)> = self
            .connection
            .query_row(SELECT_DRAFT_SQL, params![key], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .cache_context("Failed to query draft")?;

        match row {
            Some((document, cache_only)) => {
                let draft: Draft = serde_json::from_str(&document)?;
                Ok(Some(CachedDraft { draft, cache_only }))
            }
            None => Ok(None),
        }
    }

    /// Reads every row. Rows whose documents no longer deserialize are
    /// skipped with a warning rather than poisoning the whole listing.
    pub(super) fn list_drafts(&self) -> Result<Vec<CachedDraft>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_DRAFTS_SQL)
            .cache_context("Failed to prepare draft listing")?;

        let rows: Vec<(String, bool)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .cache_context("Failed to query drafts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .cache_context("Failed to fetch drafts")?;

        let mut drafts = Vec::with_capacity(rows.len());
        for (document, cache_only) in rows {
            match serde_json::from_str::<Draft>(&document) {
                Ok(draft) => drafts.push(CachedDraft { draft, cache_only }),
                Err(e) => log::warn!("Skipping undeserializable cached draft: {e}"),
            }
        }

        Ok(drafts)
    }

    /// Deletes one row by key.
    pub(super) fn remove_draft(&self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_DRAFT_SQL, params![key])
            .cache_context("Failed to remove draft")?;

        Ok(())
    }
}
