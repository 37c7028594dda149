//! Error types for the draft authoring workflow.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::WizardStep;

/// Classification of a remote draft-service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Transport-level failure (connection refused, DNS, timeout)
    Network,
    /// The requested draft or campaign does not exist remotely
    NotFound,
    /// The caller is not allowed to touch this resource
    Forbidden,
    /// The backend answered with a 5xx
    ServerError,
}

impl ServiceErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceErrorKind::Network => "network",
            ServiceErrorKind::NotFound => "notFound",
            ServiceErrorKind::Forbidden => "forbidden",
            ServiceErrorKind::ServerError => "serverError",
        }
    }
}

impl std::fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failing field reported by a step validator.
///
/// `field` is a dotted path into the step payload, e.g. `team[0].bio`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Comprehensive error type for all draft workflow operations.
#[derive(Error, Debug)]
pub enum DraftError {
    /// Remote draft service failure, classified by kind
    #[error("Service error ({kind}): {message}")]
    Service {
        kind: ServiceErrorKind,
        message: String,
    },
    /// One or more fields of a step failed validation
    #[error("Validation failed for step '{step}': {} field(s)", fields.len())]
    Validation {
        step: WizardStep,
        fields: Vec<FieldError>,
    },
    /// Draft not found in either the remote store or the local cache
    #[error("Draft with ID {id} not found")]
    DraftNotFound { id: String },
    /// Both the draft-publish path and the direct-create fallback failed
    #[error("Publish failed: {message}")]
    PublishFailed { message: String },
    /// Local cache read/write errors
    #[error("Cache error: {message}")]
    Cache {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Invalid input validation errors (caller bugs, not user-fixable fields)
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DraftError {
    /// Creates a service error with the given classification.
    pub fn service(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self::Service {
            kind,
            message: message.into(),
        }
    }

    /// Creates an invalid-input error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a cache error with additional context.
    pub fn cache_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Cache {
            message: message.to_string(),
            source,
        }
    }

    /// Returns the service classification if this is a service error.
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            DraftError::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Extension trait for cache-related Results.
pub trait CacheResultExt<T> {
    /// Map rusqlite errors with a message.
    fn cache_context(self, message: &str) -> Result<T>;
}

impl<T> CacheResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn cache_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DraftError::cache_error(message, e))
    }
}

/// Result type alias for draft workflow operations
pub type Result<T> = std::result::Result<T, DraftError>;
