//! Prompt assembly: template document, key mapping, substitution and the
//! per-mode builders.

mod assembler;
mod blocks;
pub mod builders;
mod error;
pub mod keys;
pub mod options;
mod placeholders;
mod templates;
mod types;

pub use assembler::SECTION_SEPARATOR;
pub use blocks::{OUTPUT_FORMAT, PRESERVATION_RULES};
pub use builders::*;
pub use error::PromptAssemblyError;
pub use keys::{Dimension, Resolved};
pub use options::*;
pub use placeholders::{Placeholder, PlaceholderValues, unresolved_tokens};
pub use templates::{TemplateDocument, VariantGroups, Variants};
pub use types::{AssembledPrompt, DefaultedInput, PromptMode, Section};
