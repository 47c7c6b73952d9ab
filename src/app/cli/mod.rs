//! CLI Adapter.

mod build;
mod character;
mod generate;
mod templates;

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "STORYPROMPT_LOG";

#[derive(Parser)]
#[command(name = "storyprompt")]
#[command(version)]
#[command(
    about = "Assemble storybook illustration prompts and request styled images",
    long_about = None
)]
struct Cli {
    /// Configuration file (default: $STORYPROMPT_CONFIG, then ./storyprompt.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the prompt for a generation mode and print it
    #[clap(visible_alias = "b")]
    Build {
        /// Mode: enhancement, character-ability, environment, adventure-scene, adventure-cover,
        /// search-cover, search-scene, search-scene-context, story-text, story-scene, dedication
        mode: String,
        /// JSON options file, or `-` to read stdin
        #[arg(short, long)]
        options: Option<String>,
        /// Template document overriding the configured one
        #[arg(short, long)]
        templates: Option<PathBuf>,
        /// Print included, skipped and defaulted sections to stderr
        #[arg(long)]
        explain: bool,
    },
    /// Generate one styled image per style and print the outcomes as JSON
    #[clap(visible_alias = "g")]
    Generate {
        /// URL of the source drawing
        #[arg(long)]
        image_url: String,
        /// Comma-separated styles, e.g. 3d,cartoon,anime
        #[arg(long, value_delimiter = ',', required = true)]
        styles: Vec<String>,
        /// Enhancement level applied to every style
        #[arg(long, default_value = "normal")]
        level: String,
        /// Template document overriding the configured one
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
    /// Generate the character with its special ability and print the outcome as JSON
    #[clap(visible_alias = "c")]
    Character {
        /// URL of the source drawing
        #[arg(long)]
        image_url: String,
        /// JSON character-ability options file, or `-` to read stdin
        #[arg(short, long)]
        options: Option<String>,
        /// Template document overriding the configured one
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
    /// Template document commands
    #[clap(visible_alias = "t")]
    Templates {
        #[command(subcommand)]
        command: templates::TemplatesCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Build { mode, options, templates, explain } => {
            build::run_build(config, &mode, options.as_deref(), templates.as_deref(), explain)
                .map(|_| 0)
        }
        Commands::Generate { image_url, styles, level, templates } => {
            generate::run_generate(config, templates.as_deref(), &image_url, &styles, &level)
        }
        Commands::Character { image_url, options, templates } => {
            character::run_character(config, templates.as_deref(), &image_url, options.as_deref())
        }
        Commands::Templates { command } => match command {
            templates::TemplatesCommands::Check { templates, strict } => {
                templates::run_check(config, templates.as_deref(), strict)
            }
            templates::TemplatesCommands::Summary { options } => {
                templates::run_summary(options.as_deref()).map(|_| 0)
            }
        },
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Options text from a file, stdin for `-`, or empty when not given.
fn read_options(source: Option<&str>) -> Result<String, AppError> {
    match source {
        None => Ok(String::new()),
        Some("-") => Ok(io::read_to_string(io::stdin())?),
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read options file {}: {}", path, e))
        }),
    }
}

/// Log to stderr so stdout carries only prompt text and JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
