pub mod configuration;
pub mod error;
pub mod prompt;

pub use configuration::{GenerationApiConfig, StorypromptConfig, TemplatesConfig};
pub use error::AppError;
pub use prompt::{AssembledPrompt, PromptAssemblyError, PromptMode, TemplateDocument};
