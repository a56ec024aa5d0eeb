//! Error types for layout parameters and settings.

use std::path::PathBuf;

use thiserror::Error;

/// Layout parameters that cannot produce a label sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Column count is zero or negative.
    #[error("column count must be at least 1 (got {columns})")]
    NoColumns { columns: i64 },

    /// No colors to pick from.
    #[error("color palette must contain at least one color")]
    EmptyPalette,

    /// A dimension that must be strictly positive.
    #[error("{field} must be greater than 0 (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    /// A dimension that must not be negative.
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    /// Geometry does not fit in `i64`.
    #[error("label sheet dimensions are too large")]
    Overflow,
}

/// Errors raised while loading or validating `settings.conf`.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required string setting is blank.
    #[error("{key} cannot be empty")]
    EmptyValue { key: &'static str },

    /// The SVG layout section is unusable.
    #[error("invalid SVG settings: {0}")]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
