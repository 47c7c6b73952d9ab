//! Character command implementation.

use std::path::Path;

use super::read_options;
use crate::app::api;
use crate::domain::{AppError, PromptMode};

/// Exit code is 1 when the generation failed; the outcome is printed either way.
pub fn run_character(
    config: Option<&Path>,
    templates: Option<&Path>,
    image_url: &str,
    options: Option<&str>,
) -> Result<i32, AppError> {
    let ctx = api::load_context(config, templates)?;
    let text = read_options(options)?;
    let options = api::parse_options(PromptMode::CharacterAbility, &text)?;
    let outcome = api::generate_character(&ctx, image_url, &options)?;

    let json = serde_json::to_string_pretty(&outcome)
        .map_err(|e| AppError::Generation(format!("Failed to encode outcome: {}", e)))?;
    println!("{}", json);

    Ok(if outcome.success { 0 } else { 1 })
}
