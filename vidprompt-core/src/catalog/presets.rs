//! Video presets

use crate::error::Error;
use crate::params::Parameters;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PRESETS_YAML: &str = include_str!("../../catalog/presets.yaml");

static BUILTIN: Lazy<PresetCatalog> = Lazy::new(|| {
    PresetCatalog::from_yaml(PRESETS_YAML).expect("embedded preset catalog is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Cinematic,
    Documentary,
    Commercial,
    Artistic,
    Educational,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 5] = [
        PresetCategory::Cinematic,
        PresetCategory::Documentary,
        PresetCategory::Commercial,
        PresetCategory::Artistic,
        PresetCategory::Educational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetCategory::Cinematic => "cinematic",
            PresetCategory::Documentary => "documentary",
            PresetCategory::Commercial => "commercial",
            PresetCategory::Artistic => "artistic",
            PresetCategory::Educational => "educational",
        }
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown preset category: {}", s))
    }
}

/// A named starting point: prompt template, model and parameter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PresetCategory,
    pub model: String,
    #[serde(default)]
    pub parameters: Parameters,
    pub prompt_template: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<VideoPreset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<VideoPreset>) -> Self {
        Self { presets }
    }

    pub fn from_yaml(source: &str) -> Result<Self, Error> {
        Ok(Self::new(serde_yaml::from_str(source)?))
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> &'static PresetCatalog {
        &BUILTIN
    }

    pub fn all(&self) -> &[VideoPreset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&VideoPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Like [`PresetCatalog::get`] but reports a missing id as an error.
    pub fn require(&self, id: &str) -> Result<&VideoPreset, Error> {
        self.get(id).ok_or_else(|| {
            tracing::warn!(preset = id, "preset lookup failed");
            Error::UnknownPreset(id.to_string())
        })
    }

    pub fn by_category(&self, category: PresetCategory) -> Vec<&VideoPreset> {
        self.presets.iter().filter(|p| p.category == category).collect()
    }

    pub fn by_model(&self, model: &str) -> Vec<&VideoPreset> {
        self.presets.iter().filter(|p| p.model == model).collect()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&VideoPreset> {
        self.presets
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }
}

pub fn all_presets() -> &'static [VideoPreset] {
    PresetCatalog::builtin().all()
}

pub fn preset_by_id(id: &str) -> Option<&'static VideoPreset> {
    PresetCatalog::builtin().get(id)
}

pub fn presets_by_category(category: PresetCategory) -> Vec<&'static VideoPreset> {
    PresetCatalog::builtin().by_category(category)
}

pub fn presets_by_model(model: &str) -> Vec<&'static VideoPreset> {
    PresetCatalog::builtin().by_model(model)
}

pub fn presets_by_tag(tag: &str) -> Vec<&'static VideoPreset> {
    PresetCatalog::builtin().by_tag(tag)
}

/// Parameter values used when no preset supplies them.
pub fn default_preset_parameters() -> Parameters {
    Parameters::new()
        .with("quality", "standard")
        .with("duration", 10)
        .with("aspectRatio", "16:9")
        .with("fps", 30)
        .with("resolution", "1080p")
        .with("motionIntensity", "moderate")
        .with("cameraMovement", "static")
        .with("lighting", "natural")
        .with("colorGrading", "natural")
}
