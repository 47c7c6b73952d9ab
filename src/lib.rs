//! storyprompt: prompt assembly and image-generation requests for illustrated
//! children's storybooks.
//!
//! Prompts are assembled from a JSON template document (a bundled default ships
//! with the crate) by one builder per generation mode. The generation service
//! sends assembled prompts to an image edit API, one request per style.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

pub use app::api::{ModeStatus, TemplateReport};
pub use domain::prompt::{
    AdventureCoverOptions, AdventureSceneOptions, CharacterAbilityOptions, DedicationOptions,
    EnhancementOptions, EnvironmentOptions, SearchAdventureOptions, SearchSceneContextOptions,
    StorySceneOptions, StoryTextOptions, build_adventure_cover_prompt,
    build_adventure_scene_prompt, build_character_ability_prompt, build_dedication_scene_prompt,
    build_enhancement_prompt, build_environment_prompt, build_prompt, build_search_cover_prompt,
    build_search_scene_context_prompt, build_search_scene_prompt, build_story_scene_prompt,
    build_story_text_prompt, prompt_summary,
};
pub use domain::{
    AppError, AssembledPrompt, PromptAssemblyError, PromptMode, StorypromptConfig,
    TemplateDocument,
};
pub use ports::{GeneratedImage, GenerationClient, GenerationRequest};
pub use services::{
    CharacterAbilityRequest, GenerationOutcome, HttpGenerationClient, StyledImageRequest,
    generate_character_with_ability, generate_styled_image, generate_styled_images,
    load_templates,
};

/// Assemble a prompt for `mode` from JSON options text using the bundled
/// template document, or the document at `templates`.
pub fn build(
    mode: &str,
    options_json: &str,
    templates: Option<&Path>,
) -> Result<AssembledPrompt, AppError> {
    let mode: PromptMode = mode.parse()?;
    let document = load_templates(templates)?;
    let options: Value = app::api::parse_options(mode, options_json)?;
    Ok(build_prompt(&document, mode, &options)?)
}

/// Generate one styled image per style through the configured generation API.
///
/// Configuration is read from `config` (or `STORYPROMPT_CONFIG`, then
/// `./storyprompt.toml`); a missing file means defaults.
pub fn generate(
    config: Option<&Path>,
    image_url: &str,
    styles: &[String],
    level: &str,
) -> Result<BTreeMap<String, GenerationOutcome>, AppError> {
    let ctx = app::api::load_context(config, None)?;
    app::api::generate(&ctx, image_url, styles, level)
}

/// Generate the character drawn with its special ability.
///
/// `options_json` holds character-ability options; blank text means defaults.
pub fn generate_character(
    config: Option<&Path>,
    image_url: &str,
    options_json: &str,
) -> Result<GenerationOutcome, AppError> {
    let ctx = app::api::load_context(config, None)?;
    let options = app::api::parse_options(PromptMode::CharacterAbility, options_json)?;
    app::api::generate_character(&ctx, image_url, &options)
}

/// Report which generation modes the template document provides.
pub fn check_templates(
    config: Option<&Path>,
    templates: Option<&Path>,
) -> Result<TemplateReport, AppError> {
    let ctx = app::api::load_context(config, templates)?;
    Ok(app::api::check_templates(&ctx))
}
