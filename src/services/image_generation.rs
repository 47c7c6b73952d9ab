//! Styled image generation on top of the prompt builders.

use std::collections::BTreeMap;
use std::thread;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::prompt::keys::{CharacterStyle, EnhancementLevel};
use crate::domain::prompt::{
    AdventureSceneOptions, CharacterAbilityOptions, EnhancementOptions, EnvironmentOptions,
    build_adventure_scene_prompt, build_character_ability_prompt, build_enhancement_prompt,
    build_environment_prompt, character_ability_negative_prompt,
};
use crate::domain::{AppError, TemplateDocument};
use crate::ports::{GenerationClient, GenerationRequest};

/// Style name that places the character into a world; the quality names the world.
pub const ENVIRONMENT_STYLE: &str = "environment";
/// Style name for adventure scenes; the quality is `<world>_<adventure>`.
pub const ADVENTURE_STYLE: &str = "adventure";

/// Result of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationOutcome {
    pub fn succeeded(url: impl Into<String>) -> Self {
        Self { success: true, url: Some(url.into()), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, url: None, error: Some(error.into()) }
    }

    fn from_error(err: &AppError) -> Self {
        match err {
            AppError::Generation(message) => Self::failed(message.clone()),
            AppError::GenerationRejected { .. } => Self::failed(err.to_string()),
            other => Self::failed(other.user_message()),
        }
    }
}

/// A request for one styled rendition of a source image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledImageRequest {
    pub image_url: String,
    /// `3d`, `cartoon`, `anime`, `environment`, `adventure` or any free-form style.
    pub style: String,
    /// Enhancement level, world, or `<world>_<adventure>` depending on the style.
    pub quality: String,
    pub character_name: Option<String>,
    pub character_type: Option<String>,
    pub special_ability: Option<String>,
}

/// Generate one styled image. Failures are reported in the outcome.
pub fn generate_styled_image<C>(
    client: &C,
    templates: &TemplateDocument,
    request: &StyledImageRequest,
) -> GenerationOutcome
where
    C: GenerationClient + ?Sized,
{
    if request.image_url.trim().is_empty() {
        return GenerationOutcome::failed("No image URL provided");
    }

    let result = styled_prompt(templates, request).and_then(|prompt| {
        client.generate(GenerationRequest {
            image_url: request.image_url.clone(),
            prompt,
            negative_prompt: None,
        })
    });

    match result {
        Ok(image) => {
            info!(style = %request.style, url = %image.url, "image generated");
            GenerationOutcome::succeeded(image.url)
        }
        Err(err) => {
            warn!(style = %request.style, error = %err, "image generation failed");
            GenerationOutcome::from_error(&err)
        }
    }
}

/// Prompt for a styled request, chosen from the style and quality pair.
pub fn styled_prompt(
    templates: &TemplateDocument,
    request: &StyledImageRequest,
) -> Result<String, AppError> {
    let style = CharacterStyle::parse(&request.style);
    let level = EnhancementLevel::parse(&request.quality);

    let prompt = if style.is_recognized() && level.is_recognized() {
        let options = EnhancementOptions {
            character_name: request.character_name.clone().unwrap_or_default(),
            character_type: request.character_type.clone().unwrap_or_default(),
            character_style: style.value().key().to_string(),
            special_ability: request.special_ability.clone().unwrap_or_default(),
            enhancement_level: level.value().key().to_string(),
            age_group: None,
            uploaded_image_url: Some(request.image_url.clone()),
        };
        build_enhancement_prompt(templates, &options)?.into_string()
    } else if request.style == ENVIRONMENT_STYLE {
        let options = EnvironmentOptions {
            story_world: request.quality.clone(),
            character_name: request.character_name.clone(),
        };
        build_environment_prompt(templates, &options)?.into_string()
    } else if request.style == ADVENTURE_STYLE {
        let (world, adventure) =
            request.quality.split_once('_').unwrap_or((request.quality.as_str(), ""));
        let options = AdventureSceneOptions {
            story_world: world.to_string(),
            adventure_type: adventure.to_string(),
            character_name: request.character_name.clone(),
            special_ability: request.special_ability.clone(),
        };
        build_adventure_scene_prompt(templates, &options)?.into_string()
    } else {
        format!(
            "Enhance this character image with a {} style at {} quality level. Keep the character's original features and personality intact while applying the requested style.",
            request.style, request.quality
        )
    };
    Ok(prompt)
}

/// A request for the character drawn with its special ability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterAbilityRequest {
    pub image_url: String,
    pub options: CharacterAbilityOptions,
}

/// Generate the character with its special ability, sending the preservation
/// rules as the negative prompt.
pub fn generate_character_with_ability<C>(
    client: &C,
    templates: &TemplateDocument,
    request: &CharacterAbilityRequest,
) -> GenerationOutcome
where
    C: GenerationClient + ?Sized,
{
    if request.image_url.trim().is_empty() {
        return GenerationOutcome::failed("No image URL provided");
    }

    let result = build_character_ability_prompt(templates, &request.options)
        .map_err(AppError::from)
        .and_then(|prompt| {
            client.generate(GenerationRequest {
                image_url: request.image_url.clone(),
                prompt: prompt.into_string(),
                negative_prompt: Some(character_ability_negative_prompt()),
            })
        });

    match result {
        Ok(image) => {
            info!(url = %image.url, "character image generated");
            GenerationOutcome::succeeded(image.url)
        }
        Err(AppError::GenerationRejected { status, reason }) => {
            warn!(status, "character generation rejected");
            GenerationOutcome::failed(format!(
                "Failed to generate character image: {} {}",
                status, reason
            ))
        }
        Err(err) => {
            warn!(error = %err, "character generation failed");
            GenerationOutcome::from_error(&err)
        }
    }
}

/// Generate one image per style concurrently.
///
/// Each style runs on its own scoped thread. A failing or panicking request
/// only affects its own entry.
pub fn generate_styled_images<C>(
    client: &C,
    templates: &TemplateDocument,
    image_url: &str,
    styles: &[String],
    quality: &str,
) -> BTreeMap<String, GenerationOutcome>
where
    C: GenerationClient + ?Sized,
{
    thread::scope(|scope| {
        let handles: Vec<_> = styles
            .iter()
            .map(|style| {
                let request = StyledImageRequest {
                    image_url: image_url.to_string(),
                    style: style.clone(),
                    quality: quality.to_string(),
                    ..Default::default()
                };
                (style, scope.spawn(move || generate_styled_image(client, templates, &request)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(style, handle)| {
                let outcome = handle.join().unwrap_or_else(|_| {
                    warn!(%style, "generation task panicked");
                    GenerationOutcome::failed("Request task panicked")
                });
                (style.clone(), outcome)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGenerationClient;
    use crate::testing::fixtures;

    fn styles(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn one_failing_style_does_not_affect_the_other() {
        let document = fixtures::bundled();
        let client = FakeGenerationClient::new("https://cdn.example/out.png")
            .rejecting_when_prompt_contains("3D STYLE (NORMAL)", 500, "Internal Server Error");

        let outcomes = generate_styled_images(
            &client,
            &document,
            "https://img.example/drawing.png",
            &styles(&["3d", "cartoon"]),
            "normal",
        );

        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            outcomes["3d"],
            GenerationOutcome::failed("Failed to generate image: 500 Internal Server Error")
        );
        assert_eq!(
            outcomes["cartoon"],
            GenerationOutcome::succeeded("https://cdn.example/out.png")
        );
        assert_eq!(client.requests().len(), 2);
    }

    #[test]
    fn panicking_request_becomes_a_failure_outcome() {
        let document = fixtures::bundled();
        let client = FakeGenerationClient::new("https://cdn.example/out.png")
            .panicking_when_prompt_contains("ANIME STYLE (HIGH)");

        let outcomes = generate_styled_images(
            &client,
            &document,
            "https://img.example/drawing.png",
            &styles(&["anime", "3d"]),
            "high",
        );

        assert_eq!(outcomes["anime"], GenerationOutcome::failed("Request task panicked"));
        assert!(outcomes["3d"].success);
    }

    #[test]
    fn empty_image_url_fails_without_calling_the_api() {
        let document = fixtures::bundled();
        let client = FakeGenerationClient::new("https://cdn.example/out.png");
        let request =
            StyledImageRequest { style: "3d".into(), quality: "high".into(), ..Default::default() };

        let outcome = generate_styled_image(&client, &document, &request);

        assert_eq!(outcome, GenerationOutcome::failed("No image URL provided"));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn enhancement_styles_use_the_enhancement_builder() {
        let document = fixtures::bundled();
        let request = StyledImageRequest {
            image_url: "https://img.example/drawing.png".into(),
            style: "cartoon".into(),
            quality: "minimal".into(),
            character_name: Some("Ruby".into()),
            ..Default::default()
        };

        let prompt = styled_prompt(&document, &request).unwrap();
        assert!(prompt.starts_with("MINIMAL ENHANCEMENT: Clean up the child's drawing of Ruby (https://img.example/drawing.png)"));
    }

    #[test]
    fn environment_and_adventure_styles_pick_world_templates() {
        let document = fixtures::bundled();
        let environment = StyledImageRequest {
            image_url: "https://img.example/a.png".into(),
            style: "environment".into(),
            quality: "outerspace".into(),
            ..Default::default()
        };
        assert!(styled_prompt(&document, &environment).unwrap().contains("set in outer space"));

        let adventure = StyledImageRequest {
            style: "adventure".into(),
            quality: "underwater_treasurehunt".into(),
            ..environment
        };
        assert!(styled_prompt(&document, &adventure).unwrap().contains("legendary treasure chest"));
    }

    #[test]
    fn other_styles_get_the_generic_prompt() {
        let document = fixtures::bundled();
        let request = StyledImageRequest {
            image_url: "https://img.example/a.png".into(),
            style: "watercolor".into(),
            quality: "initial".into(),
            ..Default::default()
        };
        assert_eq!(
            styled_prompt(&document, &request).unwrap(),
            "Enhance this character image with a watercolor style at initial quality level. Keep the character's original features and personality intact while applying the requested style."
        );
    }

    #[test]
    fn missing_templates_report_a_user_message() {
        let client = FakeGenerationClient::new("https://cdn.example/out.png");
        let request = StyledImageRequest {
            image_url: "https://img.example/a.png".into(),
            style: "3d".into(),
            quality: "normal".into(),
            ..Default::default()
        };

        let outcome = generate_styled_image(&client, &TemplateDocument::default(), &request);
        assert_eq!(outcome, GenerationOutcome::failed("Could not prepare the generation request."));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn character_with_ability_sends_negative_prompt() {
        let document = fixtures::bundled();
        let client = FakeGenerationClient::new("https://cdn.example/hero.png");
        let request = CharacterAbilityRequest {
            image_url: "https://img.example/a.png".into(),
            options: CharacterAbilityOptions {
                character_type: Some("animal".into()),
                special_ability: Some("flying".into()),
                description: None,
            },
        };

        let outcome = generate_character_with_ability(&client, &document, &request);

        assert_eq!(outcome, GenerationOutcome::succeeded("https://cdn.example/hero.png"));
        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].prompt.starts_with("The character is an animal. SPECIAL ABILITY - FLYING"));
        assert_eq!(sent[0].negative_prompt, Some(character_ability_negative_prompt()));
    }

    fn ability_request() -> CharacterAbilityRequest {
        CharacterAbilityRequest {
            image_url: "https://img.example/a.png".into(),
            options: CharacterAbilityOptions {
                character_type: Some("person".into()),
                special_ability: Some("invisibility".into()),
                description: Some("Has a red cape.".into()),
            },
        }
    }

    #[test]
    fn rejected_character_request_names_the_character_image() {
        let document = fixtures::bundled();
        let client = FakeGenerationClient::new("https://cdn.example/hero.png")
            .rejecting_when_prompt_contains("INVISIBILITY", 502, "Bad Gateway");

        let outcome = generate_character_with_ability(&client, &document, &ability_request());

        assert_eq!(
            outcome,
            GenerationOutcome::failed("Failed to generate character image: 502 Bad Gateway")
        );
    }

    #[test]
    fn character_request_without_upload_keeps_api_message() {
        let document = fixtures::bundled();
        let client = FakeGenerationClient::new("https://cdn.example/hero.png")
            .failing_when_prompt_contains("red cape", "No image URL received from the API");

        let outcome = generate_character_with_ability(&client, &document, &ability_request());

        assert_eq!(outcome, GenerationOutcome::failed("No image URL received from the API"));
        assert!(client.requests()[0].prompt.contains("Has a red cape."));
    }

    #[test]
    fn outcome_serializes_without_empty_fields() {
        let json = serde_json::to_string(&GenerationOutcome::succeeded("https://a/b.png")).unwrap();
        assert_eq!(json, r#"{"success":true,"url":"https://a/b.png"}"#);
    }
}
