pub mod loader;
pub mod storyprompt_config;

pub use loader::{
    CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, config_path, load_config, parse_config_content,
};
pub use storyprompt_config::{GenerationApiConfig, StorypromptConfig, TemplatesConfig};
