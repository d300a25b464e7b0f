//! Common error types for artpipe

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for artpipe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the artpipe tools
#[derive(Error, Debug)]
pub enum Error {
    /// Source file missing or unreadable
    #[error("File not found or unreadable: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source content is not a JSON array of records
    #[error("Invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record failed the required-field check before persistence
    #[error("Invalid article at index {index}: missing {field}")]
    Validation { index: usize, field: &'static str },

    /// Serialization or temp-file write failed
    #[error("Unable to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be moved onto the destination
    #[error("Unable to rename {} to {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository already holds an article with this slug
    #[error("Slug already exists: {0}")]
    DuplicateSlug(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
