use thiserror::Error;

/// Error during prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptAssemblyError {
    /// The mode's top-level sub-tree is missing from the template document.
    #[error("Prompt template sub-tree '{mode}' not found in template document")]
    ModeNotFound { mode: String },

    /// A built-in text block failed to render.
    #[error("Failed to render built-in block {block}: {reason}")]
    BlockRender { block: String, reason: String },

    /// Caller-supplied options could not be decoded for the mode.
    #[error("Invalid options for {mode}: {reason}")]
    InvalidOptions { mode: String, reason: String },

    /// The requested mode name is not one of the known generation modes.
    #[error("Unknown prompt mode '{0}'")]
    UnknownMode(String),
}

impl PromptAssemblyError {
    pub(crate) fn mode_not_found(mode: impl Into<String>) -> Self {
        Self::ModeNotFound { mode: mode.into() }
    }
}
