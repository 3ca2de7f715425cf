//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`StoreError`], [`EnrichmentError`]), the song service reports the
//! unified [`Error`], and CLI/main uses `anyhow` for convenient propagation.
//!
//! # Design
//!
//! - [`Error`]: top-level error enum, one variant per failure class
//! - Module-specific errors convert into it with `?`
//! - [`Error::root`] peels off context wrappers so callers (e.g. the HTTP
//!   layer) can classify the underlying failure
//!
//! # Example
//!
//! ```ignore
//! use song_library::error::{Error, Result};
//!
//! async fn rename(store: &dyn SongStore, mut song: Song) -> Result<()> {
//!     if song.id <= 0 {
//!         return Err(Error::validation("song ID is required"));
//!     }
//!     store.update(&song).await?; // StoreError auto-converts
//!     Ok(())
//! }
//! ```

use crate::enrichment::EnrichmentError;
use crate::library::StoreError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed input (empty names, zero ID)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Song lookup miss
    #[error("Song not found: {0}")]
    NotFound(i64),

    /// Song store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Detail lookup failure
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not found error.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound(id)
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any context wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Self::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, StoreError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Storage(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found(42);
        assert!(err.to_string().contains("42"));

        let err = Error::validation("group name and song name are required");
        assert!(err.to_string().contains("group name"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::config("missing bind address").context("while loading config");
        let msg = err.to_string();
        assert!(msg.contains("while loading config"));
        assert!(matches!(err.root(), Error::Config(_)));
    }

    #[test]
    fn test_root_peels_nested_context() {
        let err = Error::not_found(3).context("inner").context("outer");
        assert!(matches!(err.root(), Error::NotFound(3)));
    }

    #[test]
    fn test_enrichment_error_converts() {
        let err: Error = EnrichmentError::Network("timeout".to_string()).into();
        assert!(matches!(err, Error::Enrichment(EnrichmentError::Network(_))));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<()> = Err(Error::validation("test"));
        let with_ctx = result.with_context("additional context");
        assert!(with_ctx.unwrap_err().to_string().contains("additional context"));
    }
}
