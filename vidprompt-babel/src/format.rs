//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for rendering builder state, and for reading it back
//! where the format allows it.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;
use vidprompt_core::BuilderState;

/// Trait for output formats
///
/// Every format serializes. Only lossless formats (JSON) also parse.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, state: &BuilderState) -> Result<String, FormatError> {
///         Ok(state.prompt.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "markdown")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (text → BuilderState)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Parse text back into a state
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<BuilderState, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Render a state as text
    fn serialize(&self, state: &BuilderState) -> Result<String, FormatError>;
}

/// The built-in formats, in their canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Json,
    Yaml,
    Markdown,
    Natural,
}

impl FormatKind {
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Json,
        FormatKind::Yaml,
        FormatKind::Markdown,
        FormatKind::Natural,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Json => "json",
            FormatKind::Yaml => "yaml",
            FormatKind::Markdown => "markdown",
            FormatKind::Natural => "natural",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = FormatError;

    /// Accepts format names and their common extensions ("yml", "md").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(FormatKind::Json),
            "yaml" | "yml" => Ok(FormatKind::Yaml),
            "markdown" | "md" => Ok(FormatKind::Markdown),
            "natural" | "text" | "txt" => Ok(FormatKind::Natural),
            _ => Err(FormatError::FormatNotFound(s.to_string())),
        }
    }
}
