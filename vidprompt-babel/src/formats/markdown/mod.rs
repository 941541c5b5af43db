//! Markdown format
//!
//! Sections, always in this order, each omitted when it has nothing to show:
//!
//!     | Section            | Shown when                                  |
//!     | title + summary    | always                                      |
//!     | Prompt             | always                                      |
//!     | Parameters         | the parameter map has at least one key      |
//!     | Field Provenance   | some provenance entry is not from the user  |
//!
//! Parameter bullets carry an inline provenance annotation when the field has an entry; fields
//! without one get no annotation at all.

use crate::common::{annotation, provenance_line};
use crate::error::FormatError;
use crate::format::Format;
use vidprompt_core::BuilderState;

pub fn serialize_state(state: &BuilderState) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Video Prompt Configuration".to_string());
    lines.push(String::new());
    lines.push(format!("**Generated:** {}", state.metadata.timestamp));
    lines.push(format!("**Model:** {}", state.model));
    if let Some(preset) = state.preset() {
        lines.push(format!("**Preset:** {}", preset));
    }
    if let Some(intent) = state.intent() {
        lines.push(format!("**Intent:** {}", intent));
    }
    lines.push(String::new());

    lines.push("## Prompt".to_string());
    lines.push(String::new());
    lines.push("```".to_string());
    lines.push(state.prompt.clone());
    lines.push("```".to_string());
    lines.push(String::new());

    if !state.parameters.is_empty() {
        lines.push("## Parameters".to_string());
        lines.push(String::new());
        for (key, value) in state.parameters.defined() {
            let source_info = state
                .provenance
                .get(key)
                .map(annotation)
                .unwrap_or_default();
            lines.push(format!("- **{}:** {}{}", key, value, source_info));
        }
        lines.push(String::new());
    }

    let tracked: Vec<_> = state.provenance.tracked().collect();
    if !tracked.is_empty() {
        lines.push("## Field Provenance".to_string());
        lines.push(String::new());
        for (field, entry) in tracked {
            lines.push(provenance_line(field, entry));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown document with parameter provenance"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(&self, state: &BuilderState) -> Result<String, FormatError> {
        Ok(serialize_state(state))
    }
}
