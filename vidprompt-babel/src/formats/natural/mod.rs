//! Natural-language format
//!
//! Renders a state as a short prose description: an opening sentence naming the model, preset,
//! intent and creation time, the prompt quoted verbatim, a sentence listing the technical
//! specifications, and bullets explaining where preset or intent values came from.
//!
//! Only a fixed, ordered subset of parameters is described in prose; the rest of the parameter
//! map is not mentioned. A parameter is described when its value is set and non-empty (an empty
//! string, zero or `false` is treated as unset).

mod timestamp;

pub use timestamp::{localize_timestamp, DEFAULT_TIMESTAMP_PATTERN};

use crate::common::join_list;
use crate::error::FormatError;
use crate::format::Format;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use vidprompt_core::{BuilderState, Source};

/// Parameters described in the technical specifications sentence, with the words following each
/// value.
const TECHNICAL_FRAGMENTS: [(&str, &str); 9] = [
    ("quality", "quality"),
    ("resolution", "resolution"),
    ("fps", "frames per second"),
    ("duration", "seconds long"),
    ("aspectRatio", "aspect ratio"),
    ("cameraMovement", "camera movement"),
    ("lighting", "lighting"),
    ("motionIntensity", "motion intensity"),
    ("colorGrading", "color grading"),
];

/// Time zone used to present the creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneMode {
    #[default]
    Local,
    Utc,
}

impl fmt::Display for TimeZoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneMode::Local => f.write_str("local"),
            TimeZoneMode::Utc => f.write_str("utc"),
        }
    }
}

impl FromStr for TimeZoneMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(TimeZoneMode::Local),
            "utc" => Ok(TimeZoneMode::Utc),
            other => Err(format!("unknown time zone mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalOptions {
    pub time_zone: TimeZoneMode,
    /// chrono strftime pattern for the creation timestamp
    pub timestamp_pattern: String,
}

impl Default for NaturalOptions {
    fn default() -> Self {
        Self {
            time_zone: TimeZoneMode::Local,
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
    }
}

pub fn serialize_state(state: &BuilderState, options: &NaturalOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "This video prompt was created for the {} model",
        state.model
    ));
    if let Some(preset) = state.preset() {
        parts.push(format!(" using the \"{}\" preset", preset));
    }
    if let Some(intent) = state.intent() {
        parts.push(format!(" with \"{}\" intent", intent));
    }
    parts.push(format!(
        " on {}.",
        localize_timestamp(&state.metadata.timestamp, options)
    ));

    parts.push("\n\n**The prompt reads:**\n".to_string());
    parts.push(format!("\"{}\"", state.prompt));

    let fragments = technical_fragments(state);
    if !fragments.is_empty() {
        parts.push("\n\n**Technical specifications include:**\n".to_string());
        parts.push(join_list(&fragments));
        parts.push(".".to_string());
    }

    let details = configuration_details(state);
    if !details.is_empty() {
        parts.push("\n\n**Configuration details:**\n".to_string());
        for detail in details {
            parts.push(format!("\u{2022} {}\n", detail));
        }
    }

    parts.concat()
}

fn technical_fragments(state: &BuilderState) -> Vec<String> {
    TECHNICAL_FRAGMENTS
        .iter()
        .filter_map(|(key, words)| {
            state
                .parameters
                .get(key)
                .filter(|value| value.is_truthy())
                .map(|value| format!("{} {}", value, words))
        })
        .collect()
}

fn configuration_details(state: &BuilderState) -> Vec<String> {
    let mut details = Vec::new();
    for (field, entry) in state.provenance.iter() {
        match (entry.source, entry.origin()) {
            (Source::Preset, Some(origin)) => {
                details.push(format!("{} from \"{}\" preset", field, origin))
            }
            (Source::Intent, Some(origin)) => {
                details.push(format!("{} from \"{}\" intent", field, origin))
            }
            _ => {}
        }
        if entry.is_modified() {
            details.push(format!("{} was customized by the user", field));
        }
    }
    details
}

pub struct NaturalFormat {
    options: NaturalOptions,
}

impl NaturalFormat {
    pub fn new(options: NaturalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NaturalOptions {
        &self.options
    }
}

impl Default for NaturalFormat {
    fn default() -> Self {
        Self::new(NaturalOptions::default())
    }
}

impl Format for NaturalFormat {
    fn name(&self) -> &str {
        "natural"
    }

    fn description(&self) -> &str {
        "Plain-English description of the configuration"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn serialize(&self, state: &BuilderState) -> Result<String, FormatError> {
        Ok(serialize_state(state, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidprompt_core::{ParamValue, Parameters, Provenance, ProvenanceEntry};

    fn utc() -> NaturalOptions {
        NaturalOptions {
            time_zone: TimeZoneMode::Utc,
            ..NaturalOptions::default()
        }
    }

    fn render(parameters: Parameters, provenance: Provenance) -> String {
        let state = BuilderState::builder("x", "sora")
            .parameters(parameters)
            .provenance(provenance)
            .timestamp("2025-01-01T00:00:00.000Z")
            .build();
        serialize_state(&state, &utc())
    }

    #[test]
    fn test_opening_sentence() {
        let state = BuilderState::builder("x", "sora")
            .preset("hero")
            .intent("chase")
            .timestamp("2025-07-04T15:30:05.000Z")
            .build();
        assert!(serialize_state(&state, &utc()).starts_with(
            "This video prompt was created for the sora model using the \"hero\" preset with \"chase\" intent on 7/4/2025, 3:30:05 PM.\n\n**The prompt reads:**\n\"x\""
        ));
    }

    #[test]
    fn test_single_fragment() {
        let text = render(Parameters::new().with("quality", "high"), Provenance::new());
        assert!(text.ends_with("**Technical specifications include:**\nhigh quality."));
    }

    #[test]
    fn test_two_fragments() {
        let text = render(
            Parameters::new().with("duration", 5).with("quality", "high"),
            Provenance::new(),
        );
        assert!(text.contains("high quality and 5 seconds long."));
    }

    #[test]
    fn test_fixed_order_and_oxford_comma() {
        let text = render(
            Parameters::new()
                .with("colorGrading", "warm")
                .with("fps", 24)
                .with("resolution", "4k")
                .with("style", "noir"),
            Provenance::new(),
        );
        assert!(text.contains("4k resolution, 24 frames per second, and warm color grading."));
        assert!(!text.contains("noir"));
    }

    #[test]
    fn test_unset_values_are_not_described() {
        let text = render(
            Parameters::new()
                .with("quality", "")
                .with("duration", 0)
                .with("lighting", ParamValue::Absent),
            Provenance::new(),
        );
        assert!(!text.contains("Technical specifications"));
    }

    #[test]
    fn test_configuration_details() {
        let text = render(
            Parameters::new(),
            Provenance::new()
                .with("fps", ProvenanceEntry::preset("hero").with_modified(true))
                .with("aspectRatio", ProvenanceEntry::intent("chase"))
                .with("style", ProvenanceEntry::user_edit())
                .with("seed", ProvenanceEntry::generated())
                .with("lighting", ProvenanceEntry::preset("")),
        );
        assert!(text.ends_with(concat!(
            "\n\n**Configuration details:**\n",
            "\u{2022} fps from \"hero\" preset\n",
            "\u{2022} fps was customized by the user\n",
            "\u{2022} aspectRatio from \"chase\" intent\n",
            "\u{2022} style was customized by the user\n",
        )));
    }

    #[test]
    fn test_no_details_without_qualifying_entries() {
        let text = render(
            Parameters::new(),
            Provenance::new().with("seed", ProvenanceEntry::generated()),
        );
        assert!(!text.contains("Configuration details"));
        assert!(text.ends_with("\"x\""));
    }

    #[test]
    fn test_time_zone_mode_from_str() {
        assert_eq!("UTC".parse::<TimeZoneMode>(), Ok(TimeZoneMode::Utc));
        assert!("mars".parse::<TimeZoneMode>().is_err());
    }
}
