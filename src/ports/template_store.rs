use crate::domain::{AppError, TemplateDocument};

/// Port for obtaining the prompt template document.
pub trait TemplateStore {
    /// Human-readable origin of the document, used in diagnostics.
    fn source(&self) -> String;

    fn load(&self) -> Result<TemplateDocument, AppError>;
}
