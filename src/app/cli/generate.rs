//! Generate command implementation.

use std::path::Path;

use crate::app::api;
use crate::domain::AppError;

/// Exit code is 1 when any style failed; every outcome is printed either way.
pub fn run_generate(
    config: Option<&Path>,
    templates: Option<&Path>,
    image_url: &str,
    styles: &[String],
    level: &str,
) -> Result<i32, AppError> {
    let ctx = api::load_context(config, templates)?;
    let outcomes = api::generate(&ctx, image_url, styles, level)?;

    let json = serde_json::to_string_pretty(&outcomes)
        .map_err(|e| AppError::Generation(format!("Failed to encode outcomes: {}", e)))?;
    println!("{}", json);

    let failed = outcomes.values().filter(|outcome| !outcome.success).count();
    Ok(if failed > 0 { 1 } else { 0 })
}
