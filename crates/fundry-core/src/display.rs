//! Display wrappers for rendering drafts and campaigns as plain text.
//!
//! Domain models implement [`std::fmt::Display`] directly; wrapper types
//! add context for operation results (save, publish) and collections, so
//! the CLI can render the same data differently per situation.

use std::fmt;

use crate::models::{Campaign, Draft, PersistedDraft, PersistenceMode};

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.step_data.basics.title.is_empty() {
            "(untitled)"
        } else {
            &self.step_data.basics.title
        };
        match self.cache_key() {
            Some(key) => writeln!(f, "# {key}. {title}")?,
            None => writeln!(f, "# (unsaved). {title}")?,
        }
        writeln!(f)?;

        writeln!(f, "- Owner: {}", self.owner_id)?;
        writeln!(f, "- Status: {}", self.status.as_str())?;
        if let Some(origin) = &self.original_campaign_id {
            writeln!(f, "- Forked from campaign: {origin}")?;
        }
        writeln!(f, "- Created: {}", self.created_at)?;
        writeln!(f, "- Updated: {}", self.updated_at)?;

        if !self.step_data.basics.tagline.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.step_data.basics.tagline)?;
        }

        Ok(())
    }
}

impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.step_data.basics.title)?;
        writeln!(f)?;
        writeln!(f, "- Owner: {}", self.owner_id)?;
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Created: {}", self.created_at)?;
        Ok(())
    }
}

/// Newtype wrapper for displaying a collection of drafts.
///
/// Handles empty collections gracefully.
pub struct DraftSummaries(pub Vec<Draft>);

impl DraftSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Draft> {
        self.0.iter()
    }
}

impl fmt::Display for DraftSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No drafts found.");
        }
        for draft in &self.0 {
            write!(f, "{draft}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of a save operation, including
/// which persistence tier served it.
pub struct SaveResult(pub PersistedDraft);

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.persistence {
            PersistenceMode::Remote => writeln!(f, "Saved to the draft service.")?,
            PersistenceMode::CacheOnly => {
                writeln!(f, "Service unreachable; saved to the local cache only.")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.0.draft)
    }
}

/// Wrapper type for displaying the result of a publish operation.
pub struct PublishResult(pub Campaign);

impl fmt::Display for PublishResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Published campaign with ID: {}", self.0.id)?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}
