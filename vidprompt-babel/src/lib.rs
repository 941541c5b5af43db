//! Multi-format rendering of video prompt builder state
//!
//!     This crate turns a [`BuilderState`] snapshot into text: JSON, YAML, Markdown and a
//!     natural-language description. All renderers are pure reads of the snapshot; calling one
//!     twice on the same state yields the same bytes.
//!
//! Architecture
//!
//!     - Format trait: Uniform interface for all formats (serialization, and parsing where the
//!       format is lossless)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: One module per format under `formats/`
//!
//!     This is a pure lib: it powers the vidprompt cli but is shell agnostic. No code here should
//!     assume a terminal, print to stdout or read env vars.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait and FormatKind
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── common                  # Provenance annotations and English list joining
//!     ├── formats
//!     │   ├── json
//!     │   ├── yaml
//!     │   ├── markdown
//!     │   └── natural
//!     ├── lib.rs
//!
//! Output Shape
//!
//!     YAML and Markdown are assembled line by line rather than through a serializer library.
//!     Their exact layout (comment header, blank lines, provenance annotations) is part of the
//!     contract and a generic emitter would drift from it.
//!
//!     Only JSON is lossless and can be parsed back into a state.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::{Format, FormatKind};
pub use formats::natural::{NaturalOptions, TimeZoneMode};
pub use registry::FormatRegistry;

use vidprompt_core::BuilderState;

/// Pretty-printed JSON of the full state.
pub fn to_json(state: &BuilderState) -> String {
    formats::json::serialize_state(state)
}

/// Human-oriented YAML configuration block.
pub fn to_yaml(state: &BuilderState) -> String {
    formats::yaml::serialize_state(state)
}

/// Markdown document with parameter provenance annotations.
pub fn to_markdown(state: &BuilderState) -> String {
    formats::markdown::serialize_state(state)
}

/// Prose description, with the timestamp rendered in the local time zone.
pub fn to_natural(state: &BuilderState) -> String {
    formats::natural::serialize_state(state, &NaturalOptions::default())
}
