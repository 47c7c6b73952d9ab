//! API facade for the application.
//!
//! These functions glue configuration, template loading and the prompt and
//! generation services together for the CLI and library callers.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::app::AppContext;
use crate::domain::configuration::{config_path, load_config};
use crate::domain::prompt::builders::decode;
use crate::domain::prompt::{
    CharacterAbilityOptions, EnhancementOptions, build_prompt, prompt_summary,
};
use crate::domain::{AppError, AssembledPrompt, PromptAssemblyError, PromptMode};
use crate::ports::GenerationClient;
use crate::services::{
    CharacterAbilityRequest, GenerationOutcome, HttpGenerationClient,
    generate_character_with_ability, generate_styled_images, load_templates,
};

/// Label used for the template document compiled into the crate.
pub const BUNDLED_SOURCE: &str = "<bundled>";

/// Load configuration and the template document.
///
/// `templates` overrides the configured template path; without either the
/// bundled document is used.
pub fn load_context(
    config: Option<&Path>,
    templates: Option<&Path>,
) -> Result<AppContext, AppError> {
    let config = load_config(&config_path(config))?;
    let template_path = templates.map(Path::to_path_buf).or_else(|| config.templates.path.clone());

    let document = load_templates(template_path.as_deref())?;
    let source = match &template_path {
        Some(path) => path.display().to_string(),
        None => BUNDLED_SOURCE.to_string(),
    };
    Ok(AppContext::new(config, document, source))
}

/// Parse caller options given as JSON text. Blank text means default options.
pub fn parse_options(mode: PromptMode, text: &str) -> Result<Value, AppError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|err| {
        let reason = err.to_string();
        PromptAssemblyError::InvalidOptions { mode: mode.name().to_string(), reason }.into()
    })
}

/// Assemble the prompt for `mode` from JSON options.
pub fn build(
    ctx: &AppContext,
    mode: PromptMode,
    options: &Value,
) -> Result<AssembledPrompt, AppError> {
    let prompt = build_prompt(ctx.templates(), mode, options)?;
    info!(%mode, sections = prompt.included.len(), "prompt assembled");
    Ok(prompt)
}

/// Generate one image per style through the configured API.
pub fn generate(
    ctx: &AppContext,
    image_url: &str,
    styles: &[String],
    level: &str,
) -> Result<BTreeMap<String, GenerationOutcome>, AppError> {
    let client = HttpGenerationClient::new(&ctx.config().generation)?;
    Ok(generate_styled_images(&client, ctx.templates(), image_url, styles, level))
}

/// Generate the character drawn with its special ability through the configured API.
///
/// `options` holds character-ability options as JSON.
pub fn generate_character(
    ctx: &AppContext,
    image_url: &str,
    options: &Value,
) -> Result<GenerationOutcome, AppError> {
    let client = HttpGenerationClient::new(&ctx.config().generation)?;
    generate_character_with(&client, ctx, image_url, options)
}

fn generate_character_with<C: GenerationClient + ?Sized>(
    client: &C,
    ctx: &AppContext,
    image_url: &str,
    options: &Value,
) -> Result<GenerationOutcome, AppError> {
    let options: CharacterAbilityOptions = decode(PromptMode::CharacterAbility, options)?;
    let request = CharacterAbilityRequest { image_url: image_url.to_string(), options };
    Ok(generate_character_with_ability(client, ctx.templates(), &request))
}

/// One-line summary of enhancement options given as JSON.
pub fn summarize(options: &Value) -> Result<String, AppError> {
    let options: EnhancementOptions = decode(PromptMode::Enhancement, options)?;
    Ok(prompt_summary(&options))
}

/// Presence of one mode's sub-tree in the template document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStatus {
    pub mode: PromptMode,
    pub present: bool,
}

/// Which modes a template document can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReport {
    pub source: String,
    pub modes: Vec<ModeStatus>,
}

impl TemplateReport {
    pub fn missing(&self) -> impl Iterator<Item = PromptMode> + '_ {
        self.modes.iter().filter(|status| !status.present).map(|status| status.mode)
    }
}

pub fn check_templates(ctx: &AppContext) -> TemplateReport {
    let modes = PromptMode::ALL
        .into_iter()
        .map(|mode| ModeStatus { mode, present: ctx.templates().has_mode(mode) })
        .collect();
    TemplateReport { source: ctx.template_source().to_string(), modes }
}
