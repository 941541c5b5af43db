//! Prompt intents
//!
//! An intent describes a use case rather than a full configuration. Only a couple of its
//! technical hints (frame rate, aspect ratio) map onto builder parameters.

use crate::error::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const INTENTS_YAML: &str = include_str!("../../catalog/intents.yaml");

static BUILTIN: Lazy<IntentCatalog> = Lazy::new(|| {
    IntentCatalog::from_yaml(INTENTS_YAML).expect("embedded intent catalog is valid")
});

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentTechnical {
    #[serde(default)]
    pub camera_moves: Vec<String>,
    #[serde(default)]
    pub lighting: Vec<String>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub aspect: Option<String>,
    #[serde(default)]
    pub shot_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptIntent {
    pub id: String,
    pub domain: String,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub technical: IntentTechnical,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub model_support: Vec<String>,
    pub prompt_template: String,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct IntentCatalog {
    intents: Vec<PromptIntent>,
}

impl IntentCatalog {
    pub fn from_yaml(source: &str) -> Result<Self, Error> {
        Ok(Self {
            intents: serde_yaml::from_str(source)?,
        })
    }

    pub fn builtin() -> &'static IntentCatalog {
        &BUILTIN
    }

    pub fn all(&self) -> &[PromptIntent] {
        &self.intents
    }

    pub fn get(&self, id: &str) -> Option<&PromptIntent> {
        self.intents.iter().find(|i| i.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&PromptIntent, Error> {
        self.get(id).ok_or_else(|| {
            tracing::warn!(intent = id, "intent lookup failed");
            Error::UnknownIntent(id.to_string())
        })
    }
}

pub fn all_intents() -> &'static [PromptIntent] {
    IntentCatalog::builtin().all()
}

pub fn intent_by_id(id: &str) -> Option<&'static PromptIntent> {
    IntentCatalog::builtin().get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_intents() {
        let intent = intent_by_id("sci-fi-chase").unwrap();
        assert_eq!(intent.label, "Futuristic City Chase");
        assert_eq!(intent.technical.fps, Some(120));
        assert_eq!(intent.technical.aspect.as_deref(), Some("2.39:1"));
        assert_eq!(intent.technical.camera_moves, vec!["fpv", "tracking", "dolly"]);
        assert_eq!(all_intents().len(), 1);
    }

    #[test]
    fn test_require_unknown() {
        assert!(matches!(
            IntentCatalog::builtin().require("heist"),
            Err(Error::UnknownIntent(_))
        ));
    }
}
