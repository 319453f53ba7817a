//! Custom error types for the esp32-cam-codegen tool.
//!
//! Every failure is either a *resource* error (the settings document could
//! not be read) or a *format* error (it was read but is not a JSON object).
//! [`CodegenError::kind`] exposes that split so callers do not have to
//! match on individual variants.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`CodegenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The settings source could not be located or read.
    Resource,
    /// The settings source is not a structured mapping.
    Format,
}

/// Top-level error type for all code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The settings document could not be opened or read.
    #[error("cannot read settings document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid JSON.
    #[error("settings document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an object.
    #[error("settings document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl CodegenError {
    /// Whether this is a resource or a format failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } => ErrorKind::Resource,
            // serde_json reports I/O failures from a reader through its own
            // error type; keep them classified as resource errors.
            Self::Parse(e) if e.is_io() => ErrorKind::Resource,
            Self::Parse(_) | Self::NotAnObject { .. } => ErrorKind::Format,
        }
    }
}
