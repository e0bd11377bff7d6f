//! Error types for the seeker crate.

use thiserror::Error;

/// Errors reported by selection lists and catalog I/O.
///
/// Malformed filter conditions are not errors: they degrade to no-ops and
/// never reach this type.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Selector was empty or whitespace only.
    #[error("empty selector for {op}")]
    EmptySelector { op: &'static str },

    /// Range selector was reversed, started at zero, or ran past the end.
    #[error("invalid range '{selector}' ({available} available)")]
    InvalidRange { selector: String, available: usize },

    /// Index selector fell outside `1..=available`.
    #[error("invalid index '{selector}' ({available} available)")]
    InvalidIndex { selector: String, available: usize },

    /// Name selector did not match any candidate.
    #[error("no matching game found for '{name}'")]
    NoMatch { name: String },

    /// Writing or reading a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog CSV could not be decoded.
    #[error("catalog error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
