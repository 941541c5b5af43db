//! YAML format
//!
//! A hand-assembled configuration block meant for people to read and paste, not a schema-driven
//! YAML dump. Values are written as-is without quoting.
//!
//! ## Example
//!
//! ```text
//! # Video Prompt Configuration
//! # Generated: 2025-01-01T00:00:00.000Z
//!
//! prompt: >
//!   A cat video
//!
//! model:
//!   name: sora
//!
//! parameters:
//!   duration: 10
//!
//! metadata:
//!   timestamp: 2025-01-01T00:00:00.000Z
//!   version: 1.0.0
//!   preset: preset-1
//! ```

use crate::error::FormatError;
use crate::format::Format;
use vidprompt_core::BuilderState;

pub fn serialize_state(state: &BuilderState) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Video Prompt Configuration".to_string());
    lines.push(format!("# Generated: {}", state.metadata.timestamp));
    lines.push(String::new());

    lines.push("prompt: >".to_string());
    lines.push(format!("  {}", state.prompt));
    lines.push(String::new());

    lines.push("model:".to_string());
    lines.push(format!("  name: {}", state.model));
    lines.push(String::new());

    if !state.parameters.is_empty() {
        lines.push("parameters:".to_string());
        for (key, value) in state.parameters.defined() {
            lines.push(format!("  {}: {}", key, value));
        }
        lines.push(String::new());
    }

    lines.push("metadata:".to_string());
    lines.push(format!("  timestamp: {}", state.metadata.timestamp));
    lines.push(format!("  version: {}", state.metadata.version));
    if let Some(preset) = state.preset() {
        lines.push(format!("  preset: {}", preset));
    }
    if let Some(intent) = state.intent() {
        lines.push(format!("  intent: {}", intent));
    }

    lines.join("\n")
}

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Human-readable YAML configuration block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn serialize(&self, state: &BuilderState) -> Result<String, FormatError> {
        Ok(serialize_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidprompt_core::{ParamValue, Parameters};

    fn base() -> BuilderState {
        BuilderState::builder("Waves at dusk", "runway")
            .timestamp("2025-03-04T05:06:07.000Z")
            .build()
    }

    #[test]
    fn test_minimal_state() {
        assert_eq!(
            serialize_state(&base()),
            [
                "# Video Prompt Configuration",
                "# Generated: 2025-03-04T05:06:07.000Z",
                "",
                "prompt: >",
                "  Waves at dusk",
                "",
                "model:",
                "  name: runway",
                "",
                "metadata:",
                "  timestamp: 2025-03-04T05:06:07.000Z",
                "  version: 1.0.0",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let mut state = base();
        state.parameters = Parameters::new()
            .with("style", ParamValue::Absent)
            .with("fps", 24);
        let yaml = serialize_state(&state);
        assert!(yaml.contains("parameters:\n  fps: 24\n\nmetadata:"));
        assert!(!yaml.contains("style"));
        assert!(!yaml.contains("null"));
    }

    #[test]
    fn test_only_absent_values_still_emit_header() {
        let mut state = base();
        state.parameters = Parameters::new().with("style", ParamValue::Absent);
        assert!(serialize_state(&state).contains("parameters:\n\nmetadata:"));
    }

    #[test]
    fn test_intent_line() {
        let mut state = base();
        state.intent_id = Some("sci-fi-chase".to_string());
        let yaml = serialize_state(&state);
        assert!(yaml.ends_with("  version: 1.0.0\n  intent: sci-fi-chase"));
        assert!(!yaml.contains("  preset:"));
    }
}
