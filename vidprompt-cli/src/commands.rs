//! Subcommand handlers
//!
//! Handlers return the text to print so they stay testable without a terminal.

use crate::error::CliError;
use std::path::PathBuf;
use vidprompt_babel::{FormatKind, FormatRegistry, TimeZoneMode};
use vidprompt_config::VidpromptConfig;
use vidprompt_core::catalog::{IntentCatalog, PresetCatalog, PresetCategory, VideoPreset};
use vidprompt_core::{parse_assignment, state_from_defaults, state_from_preset, BuilderState};

/// Name accepted by `--format` for the combined bundle of every format.
pub const ALL_FORMATS: &str = "all";

#[derive(Debug, Default)]
pub struct RenderRequest {
    pub preset: Option<String>,
    pub input: Option<PathBuf>,
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub intent: Option<String>,
    pub assignments: Vec<String>,
    pub format: Option<String>,
    pub timestamp: Option<String>,
    pub utc: bool,
}

/// Handle the render command
pub fn handle_render_command(
    request: &RenderRequest,
    config: &VidpromptConfig,
) -> Result<String, CliError> {
    let mut natural = config.natural_options();
    if request.utc {
        natural.time_zone = TimeZoneMode::Utc;
    }
    let registry = FormatRegistry::with_natural_options(natural);

    let state = build_state(request, config, &registry)?;

    let format = request
        .format
        .as_deref()
        .unwrap_or(&config.output.default_format);
    if format.eq_ignore_ascii_case(ALL_FORMATS) {
        return Ok(registry.render_all(&state)?);
    }
    let kind: FormatKind = format.parse()?;
    Ok(registry.serialize(&state, kind.name())?)
}

/// Assemble the state a render request describes.
///
/// The starting point is, in order of preference: a saved JSON state, an explicit preset, a bare
/// prompt with default parameters, or the configured default preset. A given timestamp replaces
/// the one stored in a saved state. Prompt, model, intent and parameter edits are then applied on
/// top, in that order.
pub fn build_state(
    request: &RenderRequest,
    config: &VidpromptConfig,
    registry: &FormatRegistry,
) -> Result<BuilderState, CliError> {
    let presets = PresetCatalog::builtin();

    let mut state = if let Some(path) = &request.input {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut loaded = registry.parse(&source, FormatKind::Json.name())?;
        if let Some(timestamp) = request.timestamp.as_deref().filter(|ts| !ts.is_empty()) {
            loaded.metadata.timestamp = timestamp.to_string();
        }
        loaded
    } else if let Some(id) = &request.preset {
        state_from_preset(presets.require(id)?, request.timestamp.clone())
    } else if let Some(prompt) = &request.prompt {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| config.builder.default_model.clone());
        state_from_defaults(prompt.clone(), model, request.timestamp.clone())
    } else {
        state_from_preset(
            presets.require(&config.builder.default_preset)?,
            request.timestamp.clone(),
        )
    };

    if let Some(prompt) = &request.prompt {
        state = state.with_prompt(prompt.clone());
    }
    if let Some(model) = &request.model {
        state = state.with_model(model.clone());
    }
    if let Some(id) = &request.intent {
        state = state.with_intent(IntentCatalog::builtin().require(id)?);
    }
    for assignment in &request.assignments {
        let (key, value) = parse_assignment(assignment)?;
        state = state.with_parameter(&key, value);
    }

    tracing::info!(
        preset = ?state.preset_id,
        intent = ?state.intent_id,
        edits = request.assignments.len(),
        "builder state ready"
    );
    Ok(state)
}

/// Handle the presets command
pub fn handle_presets_command(
    category: Option<&str>,
    model: Option<&str>,
    tag: Option<&str>,
) -> Result<String, CliError> {
    let category = category
        .map(|c| c.parse::<PresetCategory>())
        .transpose()
        .map_err(CliError::InvalidArgument)?;

    let presets: Vec<&VideoPreset> = PresetCatalog::builtin()
        .all()
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| model.map_or(true, |m| p.model == m))
        .filter(|p| tag.map_or(true, |t| p.tags.iter().any(|pt| pt == t)))
        .collect();

    if presets.is_empty() {
        return Ok("No presets match the given filters.".to_string());
    }

    let mut out = String::from("Available presets:\n");
    for preset in presets {
        out.push_str(&format!(
            "\n  {} [{}, {}]\n    {}\n    {}\n",
            preset.id, preset.category, preset.model, preset.name, preset.description
        ));
    }
    Ok(out.trim_end().to_string())
}

/// Handle the intents command
pub fn handle_intents_command() -> String {
    let mut out = String::from("Available intents:\n");
    for intent in IntentCatalog::builtin().all() {
        out.push_str(&format!(
            "\n  {} [{}]\n    {}\n    {}\n",
            intent.id, intent.domain, intent.label, intent.description
        ));
    }
    out.trim_end().to_string()
}

/// Handle the formats command
pub fn handle_formats_command(config: &VidpromptConfig) -> String {
    let registry = FormatRegistry::with_natural_options(config.natural_options());
    let mut out = String::from("Available formats:\n");
    for name in FormatKind::ALL.iter().map(FormatKind::name) {
        if let Ok(format) = registry.get(name) {
            out.push_str(&format!("\n  {:<10} {}", name, format.description()));
        }
    }
    out.push_str(&format!(
        "\n  {:<10} Every format above, one section each",
        ALL_FORMATS
    ));
    out
}
