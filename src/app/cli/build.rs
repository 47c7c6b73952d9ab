//! Build command implementation.

use std::path::Path;

use super::read_options;
use crate::app::api;
use crate::domain::prompt::Section;
use crate::domain::{AppError, AssembledPrompt, PromptMode};

pub fn run_build(
    config: Option<&Path>,
    mode: &str,
    options: Option<&str>,
    templates: Option<&Path>,
    explain: bool,
) -> Result<(), AppError> {
    let mode: PromptMode = mode.parse()?;
    let ctx = api::load_context(config, templates)?;

    let text = read_options(options)?;
    let options = api::parse_options(mode, &text)?;
    let prompt = api::build(&ctx, mode, &options)?;

    if explain {
        eprintln!("mode: {} (templates: {})", prompt.mode, ctx.template_source());
        print_explanation(&prompt);
    }
    println!("{}", prompt);
    Ok(())
}

fn print_explanation(prompt: &AssembledPrompt) {
    eprintln!("included: {}", section_list(&prompt.included));
    eprintln!("skipped: {}", section_list(&prompt.skipped));
    for entry in &prompt.defaulted {
        eprintln!("defaulted: {} '{}' -> {}", entry.dimension, entry.input, entry.used);
    }
}

fn section_list(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "-".to_string();
    }
    sections.iter().map(Section::name).collect::<Vec<_>>().join(", ")
}
