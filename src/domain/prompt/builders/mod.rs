//! One builder per generation mode.
//!
//! Each builder is a pure function over a borrowed [`TemplateDocument`] and
//! the mode's options. `build_prompt` dispatches by mode with options given as
//! JSON, which is what the command line passes through.

mod cover;
mod dedication;
mod enhancement;
mod placement;
mod search;
mod story;

pub use cover::{
    ADVENTURE_COVER_ORDER, SEARCH_COVER_ORDER, build_adventure_cover_prompt,
    build_search_cover_prompt,
};
pub use dedication::build_dedication_scene_prompt;
pub use enhancement::{
    CHARACTER_ABILITY_ORDER, ENHANCEMENT_ORDER, build_character_ability_prompt,
    build_enhancement_prompt, character_ability_negative_prompt, prompt_summary,
};
pub use placement::{build_adventure_scene_prompt, build_environment_prompt};
pub use search::{
    SEARCH_SCENE_CONTEXT_ORDER, SEARCH_SCENE_ORDER, build_search_scene_context_prompt,
    build_search_scene_prompt,
};
pub use story::{
    STORY_PAGES, STORY_SCENE_ORDER, STORY_TEXT_ORDER, build_story_scene_prompt,
    build_story_text_prompt,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::PromptAssemblyError;
use super::placeholders::Placeholder;
use super::templates::TemplateDocument;
use super::types::{AssembledPrompt, PromptMode};

/// Trimmed caller text, or the placeholder's fallback literal when blank.
pub(crate) fn or_fallback(value: &str, placeholder: Placeholder) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder.fallback() } else { trimmed }
}

/// Build the prompt for `mode` from options given as a JSON object.
///
/// `null` is accepted as "all options omitted".
pub fn build_prompt(
    document: &TemplateDocument,
    mode: PromptMode,
    options: &Value,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    match mode {
        PromptMode::Enhancement => build_enhancement_prompt(document, &decode(mode, options)?),
        PromptMode::CharacterAbility => {
            build_character_ability_prompt(document, &decode(mode, options)?)
        }
        PromptMode::Environment => build_environment_prompt(document, &decode(mode, options)?),
        PromptMode::AdventureScene => {
            build_adventure_scene_prompt(document, &decode(mode, options)?)
        }
        PromptMode::AdventureCover => {
            build_adventure_cover_prompt(document, &decode(mode, options)?)
        }
        PromptMode::SearchCover => build_search_cover_prompt(document, &decode(mode, options)?),
        PromptMode::SearchScene => build_search_scene_prompt(document, &decode(mode, options)?),
        PromptMode::SearchSceneContext => {
            build_search_scene_context_prompt(document, &decode(mode, options)?)
        }
        PromptMode::StoryText => build_story_text_prompt(document, &decode(mode, options)?),
        PromptMode::StoryScene => build_story_scene_prompt(document, &decode(mode, options)?),
        PromptMode::Dedication => {
            build_dedication_scene_prompt(document, &decode(mode, options)?)
        }
    }
}

/// Decode `mode`'s options; `null` gives the defaults.
pub(crate) fn decode<T: DeserializeOwned + Default>(
    mode: PromptMode,
    options: &Value,
) -> Result<T, PromptAssemblyError> {
    if options.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(options.clone()).map_err(|err| PromptAssemblyError::InvalidOptions {
        mode: mode.name().to_string(),
        reason: err.to_string(),
    })
}
