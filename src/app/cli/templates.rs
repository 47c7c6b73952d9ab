//! Templates command implementation.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::read_options;
use crate::app::api;
use crate::domain::{AppError, PromptMode};

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// List which generation modes the template document provides
    #[clap(visible_alias = "c")]
    Check {
        /// Template document overriding the configured one
        #[arg(short, long)]
        templates: Option<PathBuf>,
        /// Exit with status 1 when any mode is missing
        #[arg(long)]
        strict: bool,
    },
    /// Print a one-line summary of enhancement options
    #[clap(visible_alias = "s")]
    Summary {
        /// JSON enhancement options file, or `-` to read stdin
        #[arg(short, long)]
        options: Option<String>,
    },
}

pub fn run_check(
    config: Option<&Path>,
    templates: Option<&Path>,
    strict: bool,
) -> Result<i32, AppError> {
    let ctx = api::load_context(config, templates)?;
    let report = api::check_templates(&ctx);

    println!("Template document: {}", report.source);
    for status in &report.modes {
        let mark = if status.present { "✅" } else { "❌" };
        println!("{} {:<20} {}", mark, status.mode.name(), status.mode.document_key());
    }

    let missing = report.missing().count();
    if strict && missing > 0 {
        eprintln!("{} of {} modes missing", missing, report.modes.len());
        return Ok(1);
    }
    Ok(0)
}

pub fn run_summary(options: Option<&str>) -> Result<(), AppError> {
    let text = read_options(options)?;
    let options = api::parse_options(PromptMode::Enhancement, &text)?;
    println!("{}", api::summarize(&options)?);
    Ok(())
}
