//! Shared configuration loader for the vidprompt tools.
//!
//! `defaults/vidprompt.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`VidpromptConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use vidprompt_babel::{NaturalOptions, TimeZoneMode};

const DEFAULT_TOML: &str = include_str!("../defaults/vidprompt.default.toml");

/// Top-level configuration consumed by vidprompt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct VidpromptConfig {
    pub output: OutputConfig,
    pub natural: NaturalConfig,
    pub builder: BuilderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Format name, or "all" for the combined bundle
    pub default_format: String,
}

/// Mirrors the knobs exposed by the natural-language renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct NaturalConfig {
    pub time_zone: TimeZoneMode,
    pub timestamp_pattern: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuilderConfig {
    pub default_preset: String,
    pub default_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl VidpromptConfig {
    pub fn natural_options(&self) -> NaturalOptions {
        NaturalOptions {
            time_zone: self.natural.time_zone,
            timestamp_pattern: self.natural.timestamp_pattern.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<VidpromptConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VidpromptConfig, ConfigError> {
    Loader::new().build()
}
