mod generation_client;
mod template_store;

pub use generation_client::{GeneratedImage, GenerationClient, GenerationRequest};
pub use template_store::TemplateStore;
