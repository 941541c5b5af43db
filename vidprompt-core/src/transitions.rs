//! Snapshot transitions
//!
//! Each user action (selecting a preset, editing a field, choosing an intent) copies the previous
//! snapshot and overwrites the touched keys in both `parameters` and `provenance`. The source
//! snapshot is never modified.

use crate::catalog::{default_preset_parameters, PromptIntent, VideoPreset};
use crate::error::Error;
use crate::params::{ParamValue, Parameters};
use crate::provenance::{Provenance, ProvenanceEntry};
use crate::state::{create_builder_state, BuilderState};

/// Build a fresh snapshot from a preset. Every preset parameter is attributed to the preset.
pub fn state_from_preset(preset: &VideoPreset, timestamp: Option<String>) -> BuilderState {
    create_builder_state(
        preset.prompt_template.clone(),
        preset.model.clone(),
        preset.parameters.clone(),
        Some(preset.id.clone()),
        None,
        preset_provenance(preset),
        timestamp,
    )
}

/// Build a snapshot with the default parameter set, attributed as generated.
pub fn state_from_defaults(
    prompt: impl Into<String>,
    model: impl Into<String>,
    timestamp: Option<String>,
) -> BuilderState {
    let parameters = default_preset_parameters();
    let provenance = parameters
        .keys()
        .map(|key| (key.to_string(), ProvenanceEntry::generated()))
        .collect();
    create_builder_state(prompt, model, parameters, None, None, provenance, timestamp)
}

fn preset_provenance(preset: &VideoPreset) -> Provenance {
    preset
        .parameters
        .keys()
        .map(|key| (key.to_string(), ProvenanceEntry::preset(preset.id.clone())))
        .collect()
}

impl BuilderState {
    /// Replace prompt, model and parameters with the preset's. Metadata and intent are kept;
    /// provenance is rebuilt from the preset alone.
    pub fn with_preset(&self, preset: &VideoPreset) -> BuilderState {
        tracing::debug!(preset = %preset.id, "applying preset");
        BuilderState {
            prompt: preset.prompt_template.clone(),
            model: preset.model.clone(),
            preset_id: Some(preset.id.clone()),
            parameters: preset.parameters.clone(),
            provenance: preset_provenance(preset),
            ..self.clone()
        }
    }

    /// Apply the intent's frame rate and aspect ratio hints, attributed to the intent.
    pub fn with_intent(&self, intent: &PromptIntent) -> BuilderState {
        tracing::debug!(intent = %intent.id, "applying intent");
        let mut next = self.clone();
        next.intent_id = Some(intent.id.clone());

        let hints = [
            ("fps", intent.technical.fps.map(ParamValue::from)),
            (
                "aspectRatio",
                intent.technical.aspect.clone().map(ParamValue::from),
            ),
        ];
        for (key, value) in hints {
            if let Some(value) = value {
                next.parameters.insert(key, value);
                next.provenance
                    .insert(key, ProvenanceEntry::intent(intent.id.clone()));
            }
        }
        next
    }

    /// A user edit of one field: the value is overwritten and the field is marked as user-modified.
    pub fn with_parameter(&self, key: &str, value: impl Into<ParamValue>) -> BuilderState {
        let mut next = self.clone();
        next.parameters.insert(key, value);
        next.provenance.insert(key, ProvenanceEntry::user_edit());
        next
    }

    pub fn with_prompt(&self, prompt: impl Into<String>) -> BuilderState {
        BuilderState {
            prompt: prompt.into(),
            ..self.clone()
        }
    }

    pub fn with_model(&self, model: impl Into<String>) -> BuilderState {
        BuilderState {
            model: model.into(),
            ..self.clone()
        }
    }
}

/// Parse a `key=value` assignment as typed on a command line.
///
/// Values that parse as integers or floats become numbers, `true`/`false` become booleans, and
/// anything else is kept as text. An empty value is kept as empty text.
pub fn parse_assignment(assignment: &str) -> Result<(String, ParamValue), Error> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| Error::InvalidParameter(assignment.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidParameter(assignment.to_string()));
    }

    let raw = raw.trim();
    let value = if let Ok(int) = raw.parse::<i64>() {
        ParamValue::from(int)
    } else if let Some(float) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
        ParamValue::from(float)
    } else {
        match raw {
            "true" => ParamValue::Bool(true),
            "false" => ParamValue::Bool(false),
            _ => ParamValue::from(raw),
        }
    };
    Ok((key.to_string(), value))
}

/// Parse several assignments into an ordered parameter map.
pub fn parse_assignments<'a>(
    assignments: impl IntoIterator<Item = &'a str>,
) -> Result<Parameters, Error> {
    let mut params = Parameters::new();
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        params.insert(key, value);
    }
    Ok(params)
}
