//! Configuration models for `storyprompt.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorypromptConfig {
    /// Generation API configuration.
    #[serde(default)]
    pub generation: GenerationApiConfig,
    /// Template document location.
    #[serde(default)]
    pub templates: TemplatesConfig,
}

impl StorypromptConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        self.templates.validate()?;
        Ok(())
    }
}

/// Image generation API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// Image edit endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://image-edit-five.vercel.app/edit-image")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Template document to load instead of the bundled one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl TemplatesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            return Err(AppError::config_error("templates.path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_image_edit_endpoint() {
        let config = StorypromptConfig::default();
        assert_eq!(
            config.generation.api_url.as_str(),
            "https://image-edit-five.vercel.app/edit-image"
        );
        assert_eq!(config.generation.timeout_secs, 60);
        assert_eq!(config.templates.path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = GenerationApiConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let config = GenerationApiConfig {
            api_url: Url::parse("ftp://example.com/edit").unwrap(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_template_path_is_rejected() {
        let config = TemplatesConfig { path: Some(PathBuf::new()) };
        assert!(config.validate().is_err());
    }
}
