//! Preset and intent catalogs
//!
//!     The built-in catalogs ship as YAML under `catalog/` and are embedded into the binary, so
//!     the data stays readable and editable without touching code. They are parsed once, on first
//!     use. Callers with their own catalogs can load them through [`PresetCatalog::from_yaml`] and
//!     [`IntentCatalog::from_yaml`].

pub mod intents;
pub mod presets;

pub use intents::{all_intents, intent_by_id, IntentCatalog, IntentTechnical, PromptIntent};
pub use presets::{
    all_presets, default_preset_parameters, preset_by_id, presets_by_category, presets_by_model,
    presets_by_tag, PresetCatalog, PresetCategory, VideoPreset,
};
