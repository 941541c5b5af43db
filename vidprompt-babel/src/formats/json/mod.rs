//! JSON format
//!
//! A complete, lossless dump of the state, pretty-printed with two-space indentation. Keys follow
//! the state's field order; unset optional fields and absent parameters are left out.

use crate::error::FormatError;
use crate::format::Format;
use vidprompt_core::BuilderState;

/// Serialize a state to pretty-printed JSON.
pub fn serialize_state(state: &BuilderState) -> String {
    // A BuilderState only holds strings, finite numbers, booleans and string-keyed maps, none of
    // which serde_json can reject.
    serde_json::to_string_pretty(state).unwrap_or_else(|e| {
        tracing::error!(error = %e, "builder state failed to serialize as JSON");
        String::new()
    })
}

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full builder state as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<BuilderState, FormatError> {
        Ok(BuilderState::from_json(source)?)
    }

    fn serialize(&self, state: &BuilderState) -> Result<String, FormatError> {
        serde_json::to_string_pretty(state)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidprompt_core::{Parameters, Provenance, ProvenanceEntry};

    #[test]
    fn test_two_space_indent() {
        let state = BuilderState::builder("x", "m")
            .timestamp("2025-01-01T00:00:00.000Z")
            .build();
        let json = serialize_state(&state);
        assert!(json.starts_with("{\n  \"prompt\": \"x\",\n  \"model\": \"m\",\n"));
        assert!(json.contains("  \"parameters\": {},\n"));
        assert!(json.ends_with("\n}"));
    }

    #[test]
    fn test_nested_indent() {
        let state = BuilderState::builder("x", "m")
            .parameters(Parameters::new().with("fps", 30))
            .provenance(Provenance::new().with("fps", ProvenanceEntry::user_edit()))
            .timestamp("2025-01-01T00:00:00.000Z")
            .build();
        let json = serialize_state(&state);
        assert!(json.contains("  \"parameters\": {\n    \"fps\": 30\n  },"));
        assert!(json.contains("    \"fps\": {\n      \"source\": \"user\",\n      \"modified\": true\n    }"));
    }

    #[test]
    fn test_format_trait_parse_round_trip() {
        let state = BuilderState::builder("A cat video", "sora")
            .parameters(Parameters::new().with("aspectRatio", "16:9"))
            .timestamp("2025-01-01T00:00:00.000Z")
            .build();
        let format = JsonFormat;
        let json = format.serialize(&state).unwrap();
        assert_eq!(format.parse(&json).unwrap(), state);
        assert!(matches!(format.parse("not json"), Err(FormatError::ParseError(_))));
    }
}
