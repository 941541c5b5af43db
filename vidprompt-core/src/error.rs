//! Error types for builder state operations

use thiserror::Error;

/// Errors raised around builder state construction and lookup.
///
/// The state constructor and the formatters are total; these errors only come from the edges:
/// catalog lookups, parsing user assignments, and JSON input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("unknown intent: {0}")]
    UnknownIntent(String),

    /// A `key=value` assignment that could not be split into a key and a value
    #[error("invalid parameter assignment '{0}' (expected key=value)")]
    InvalidParameter(String),

    #[error("invalid builder state JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_yaml::Error),
}
