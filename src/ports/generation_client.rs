//! Image generation API port definition.

use crate::domain::AppError;

/// Request to the image edit endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Source image the prompt is applied to.
    pub image_url: String,
    /// Assembled prompt text.
    pub prompt: String,
    /// Instructions the model must avoid.
    pub negative_prompt: Option<String>,
}

/// A successfully generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Stored image URL without its query string.
    pub url: String,
}

/// Port for image generation.
///
/// Implementations are shared across the per-style worker threads.
pub trait GenerationClient: Send + Sync {
    fn generate(&self, request: GenerationRequest) -> Result<GeneratedImage, AppError>;
}
