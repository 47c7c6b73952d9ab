//! Configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;

use super::StorypromptConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "STORYPROMPT_CONFIG";

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "storyprompt.toml";

/// Resolve the configuration path: explicit path, then `STORYPROMPT_CONFIG`,
/// then `storyprompt.toml`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Load configuration from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<StorypromptConfig, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(StorypromptConfig::default());
        }
        Err(err) => return Err(err.into()),
    };
    let mut config = parse_config_content(&content)?;

    // Relative template paths are relative to the config file.
    if let Some(template_path) = config.templates.path.as_mut()
        && template_path.is_relative()
        && let Some(parent) = path.parent()
    {
        *template_path = parent.join(&*template_path);
    }
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<StorypromptConfig, AppError> {
    let config: StorypromptConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
