//! Builder state snapshots
//!
//! [`create_builder_state`] is the only place default metadata is injected. Everything else either
//! reads a snapshot or derives a new one from an existing snapshot (see [`crate::transitions`]).

use crate::params::Parameters;
use crate::provenance::Provenance;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Version stamped into every snapshot's metadata.
pub const STATE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// ISO-8601 creation time
    pub timestamp: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// One immutable snapshot of the builder configuration.
///
/// Field order matters: JSON output follows declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderState {
    pub prompt: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
    #[serde(default)]
    pub parameters: Parameters,
    pub metadata: Metadata,
    #[serde(default)]
    pub provenance: Provenance,
}

impl BuilderState {
    pub fn builder(prompt: impl Into<String>, model: impl Into<String>) -> BuilderStateBuilder {
        BuilderStateBuilder::new(prompt, model)
    }

    /// Read a snapshot back from its JSON form.
    pub fn from_json(source: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Preset id, treating an empty string as no preset.
    pub fn preset(&self) -> Option<&str> {
        self.preset_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Intent id, treating an empty string as no intent.
    pub fn intent(&self) -> Option<&str> {
        self.intent_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Assemble a snapshot from raw inputs.
///
/// No validation is done; any prompt and model string is accepted. A missing or empty timestamp
/// is replaced by the current time.
pub fn create_builder_state(
    prompt: impl Into<String>,
    model: impl Into<String>,
    parameters: Parameters,
    preset_id: Option<String>,
    intent_id: Option<String>,
    provenance: Provenance,
    timestamp: Option<String>,
) -> BuilderState {
    let timestamp = timestamp
        .filter(|ts| !ts.is_empty())
        .unwrap_or_else(now_timestamp);

    let state = BuilderState {
        prompt: prompt.into(),
        model: model.into(),
        preset_id,
        intent_id,
        parameters,
        metadata: Metadata {
            timestamp,
            version: STATE_VERSION.to_string(),
            user_id: None,
        },
        provenance,
    };

    tracing::debug!(
        model = %state.model,
        preset = ?state.preset_id,
        parameters = state.parameters.len(),
        "created builder state"
    );
    state
}

/// Named-setter front end for [`create_builder_state`].
#[derive(Debug, Clone)]
pub struct BuilderStateBuilder {
    prompt: String,
    model: String,
    parameters: Parameters,
    preset_id: Option<String>,
    intent_id: Option<String>,
    provenance: Provenance,
    timestamp: Option<String>,
}

impl BuilderStateBuilder {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            parameters: Parameters::new(),
            preset_id: None,
            intent_id: None,
            provenance: Provenance::new(),
            timestamp: None,
        }
    }

    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn preset(mut self, preset_id: impl Into<String>) -> Self {
        self.preset_id = Some(preset_id.into());
        self
    }

    pub fn intent(mut self, intent_id: impl Into<String>) -> Self {
        self.intent_id = Some(intent_id.into());
        self
    }

    pub fn provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn build(self) -> BuilderState {
        create_builder_state(
            self.prompt,
            self.model,
            self.parameters,
            self.preset_id,
            self.intent_id,
            self.provenance,
            self.timestamp,
        )
    }
}
