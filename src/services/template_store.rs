//! Template document sources: the bundled document and JSON files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{AppError, TemplateDocument};
use crate::ports::TemplateStore;

/// The document compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn source(&self) -> String {
        "<bundled>".to_string()
    }

    fn load(&self) -> Result<TemplateDocument, AppError> {
        TemplateDocument::bundled().map_err(|err| AppError::TemplateDocument {
            path: self.source(),
            reason: err.to_string(),
        })
    }
}

/// A template document read from a JSON file.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    path: PathBuf,
}

impl FileTemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemplateStore for FileTemplateStore {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<TemplateDocument, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|err| {
            AppError::TemplateDocument { path: self.source(), reason: err.to_string() }
        })?;
        TemplateDocument::from_json(&content).map_err(|err| AppError::TemplateDocument {
            path: self.source(),
            reason: err.to_string(),
        })
    }
}

/// Load the document from `path`, or the bundled one when no path is given.
///
/// The result is shared read-only between builders and worker threads.
pub fn load_templates(path: Option<&Path>) -> Result<Arc<TemplateDocument>, AppError> {
    let store: Box<dyn TemplateStore> = match path {
        Some(path) => Box::new(FileTemplateStore::new(path)),
        None => Box::new(EmbeddedTemplateStore::new()),
    };
    let document = store.load()?;
    debug!(source = %store.source(), "loaded template document");
    Ok(Arc::new(document))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::PromptMode;

    #[test]
    fn bundled_store_loads_every_mode() {
        let document = load_templates(None).unwrap();
        assert!(PromptMode::ALL.iter().all(|mode| document.has_mode(*mode)));
    }

    #[test]
    fn file_store_reads_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompts.json");
        fs::write(&path, r#"{"generateDedicationScene": {"forest": "A quiet page."}}"#).unwrap();

        let document = load_templates(Some(&path)).unwrap();
        assert!(document.has_mode(PromptMode::Dedication));
        assert!(!document.has_mode(PromptMode::StoryText));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_templates(Some(&path)).unwrap_err();
        match err {
            AppError::TemplateDocument { path: reported, .. } => {
                assert!(reported.ends_with("absent.json"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_template_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileTemplateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, AppError::TemplateDocument { .. }));
    }
}
