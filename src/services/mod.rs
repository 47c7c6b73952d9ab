mod generation_client_http;
mod image_generation;
mod template_store;

pub use generation_client_http::HttpGenerationClient;
pub use image_generation::{
    ADVENTURE_STYLE, CharacterAbilityRequest, ENVIRONMENT_STYLE, GenerationOutcome,
    StyledImageRequest, generate_character_with_ability, generate_styled_image,
    generate_styled_images, styled_prompt,
};
pub use template_store::{EmbeddedTemplateStore, FileTemplateStore, load_templates};
