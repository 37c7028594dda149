//! Cache schema initialization and migrations.

use crate::error::{CacheResultExt, Result};

impl super::CacheDb {
    /// Initializes the cache schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .cache_context("Failed to initialize cache schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for cache files created by older versions.
    fn apply_migrations(&self) -> Result<()> {
        // Check if the cache_only column exists in the drafts table
        let has_cache_only_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('drafts') WHERE name = 'cache_only'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_cache_only_column {
            self.connection
                .execute(
                    "ALTER TABLE drafts ADD COLUMN cache_only INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .cache_context("Failed to add cache_only column to drafts table")?;
        }

        Ok(())
    }
}
