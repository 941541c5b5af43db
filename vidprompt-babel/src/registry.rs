//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::{Format, FormatKind};
use crate::formats::{JsonFormat, MarkdownFormat, NaturalFormat, NaturalOptions, YamlFormat};
use std::collections::HashMap;
use vidprompt_core::BuilderState;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let yaml = registry.serialize(&state, "yaml")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<BuilderState, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a state using the specified format
    pub fn serialize(&self, state: &BuilderState, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        tracing::debug!(format, "serializing builder state");
        fmt.serialize(state)
    }

    /// Render every built-in format into one bundle, each under a `## NAME` heading, in the order
    /// json, yaml, markdown, natural.
    pub fn render_all(&self, state: &BuilderState) -> Result<String, FormatError> {
        let sections = FormatKind::ALL
            .iter()
            .map(|kind| {
                let body = self.serialize(state, kind.name())?;
                Ok(format!("## {}\n{}", kind.name().to_uppercase(), body))
            })
            .collect::<Result<Vec<_>, FormatError>>()?;
        Ok(sections.join("\n\n"))
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        Self::with_natural_options(NaturalOptions::default())
    }

    /// Built-in formats, with the natural-language renderer configured
    pub fn with_natural_options(options: NaturalOptions) -> Self {
        let mut registry = Self::new();

        registry.register(JsonFormat);
        registry.register(YamlFormat);
        registry.register(MarkdownFormat);
        registry.register(NaturalFormat::new(options));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
