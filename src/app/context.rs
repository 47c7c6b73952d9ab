use std::sync::Arc;

use crate::domain::{StorypromptConfig, TemplateDocument};

/// Application context holding the loaded configuration and template document.
pub struct AppContext {
    config: StorypromptConfig,
    templates: Arc<TemplateDocument>,
    template_source: String,
}

impl AppContext {
    pub fn new(
        config: StorypromptConfig,
        templates: Arc<TemplateDocument>,
        template_source: impl Into<String>,
    ) -> Self {
        Self { config, templates, template_source: template_source.into() }
    }

    pub fn config(&self) -> &StorypromptConfig {
        &self.config
    }

    pub fn templates(&self) -> &TemplateDocument {
        &self.templates
    }

    /// Where the template document came from, for diagnostics.
    pub fn template_source(&self) -> &str {
        &self.template_source
    }
}
