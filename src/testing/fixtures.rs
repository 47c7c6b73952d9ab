use crate::domain::TemplateDocument;

/// The bundled template document.
pub fn bundled() -> TemplateDocument {
    TemplateDocument::bundled().unwrap()
}
