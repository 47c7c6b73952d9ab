use std::io;

use thiserror::Error;

use super::prompt::PromptAssemblyError;

/// Library-wide error type for storyprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template document could not be read or parsed.
    #[error("Invalid template document {path}: {reason}")]
    TemplateDocument { path: String, reason: String },

    /// Prompt assembly failed.
    #[error(transparent)]
    PromptAssembly(#[from] PromptAssemblyError),

    /// The generation API call failed.
    #[error("{0}")]
    Generation(String),

    /// The generation API answered with a non-success status.
    #[error("Failed to generate image: {status} {reason}")]
    GenerationRejected { status: u16, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::PromptAssembly(_) | AppError::TemplateDocument { .. } => {
                "Could not prepare the generation request.".to_string()
            }
            AppError::Generation(_) | AppError::GenerationRejected { .. } => {
                "Failed to generate image, please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_errors_convert_and_keep_detail() {
        let err: AppError = PromptAssemblyError::UnknownMode("poster".to_string()).into();
        assert_eq!(err.to_string(), "Unknown prompt mode 'poster'");
        assert_eq!(err.user_message(), "Could not prepare the generation request.");
    }

    #[test]
    fn generation_errors_have_generic_user_message() {
        let err = AppError::GenerationRejected {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to generate image: 500 Internal Server Error");
        assert_eq!(err.user_message(), "Failed to generate image, please try again.");

        let err = AppError::Generation("No image URL received from the API".into());
        assert_eq!(err.user_message(), "Failed to generate image, please try again.");
    }
}
