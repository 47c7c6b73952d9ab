//! Story text and per-page story illustration prompts.

use crate::domain::prompt::assembler::{DefaultTracker, SECTION_SEPARATOR, assemble};
use crate::domain::prompt::blocks::{OUTPUT_FORMAT, reference_image};
use crate::domain::prompt::error::PromptAssemblyError;
use crate::domain::prompt::keys::{
    AdventureType, AgeGroup, CharacterStyle, Dimension, Occasion, StoryWorld,
};
use crate::domain::prompt::options::{StorySceneOptions, StoryTextOptions};
use crate::domain::prompt::placeholders::{Placeholder, PlaceholderValues};
use crate::domain::prompt::templates::{TemplateDocument, nested, non_blank, text};
use crate::domain::prompt::types::{AssembledPrompt, PromptMode, Section};

use super::or_fallback;

/// Number of pages in a generated story.
pub const STORY_PAGES: u32 = 5;

pub const STORY_TEXT_ORDER: &[Section] = &[
    Section::BasePrompt,
    Section::AgeRequirement,
    Section::PageStructures,
    Section::ThematicRequirement,
    Section::OccasionTheme,
    Section::WorldGuidance,
    Section::ConsistencyRequirement,
    Section::OutputFormat,
];

pub const STORY_SCENE_ORDER: &[Section] = &[
    Section::BasePrompt,
    Section::ConsistencyEnforcement,
    Section::StyleSpecifications,
    Section::WorldPageEnvironment,
    Section::PageRequirements,
    Section::SceneDescription,
    Section::CharacterActionNote,
    Section::CharacterEmotion,
    Section::CompanionCharacters,
    Section::ReferenceImage,
    Section::NegativePrompts,
];

pub fn build_story_text_prompt(
    document: &TemplateDocument,
    options: &StoryTextOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.story_text()?;

    let mut defaults = DefaultTracker::new();
    let age = defaults.track(
        Dimension::AgeGroup,
        &options.age_group,
        AgeGroup::parse(&options.age_group),
        AgeGroup::key,
    );
    let adventure = defaults.track(
        Dimension::AdventureType,
        &options.adventure_type,
        AdventureType::parse(&options.adventure_type),
        AdventureType::key,
    );
    let occasion = defaults.track(
        Dimension::Occasion,
        &options.occasion_theme,
        Occasion::parse(&options.occasion_theme),
        |_: &Occasion| "general",
    );
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::key,
    );

    let reading_level =
        options.reading_level.as_deref().and_then(non_blank).unwrap_or(age.reading_level());
    let values = story_values(
        &options.character_name,
        &options.character_type,
        &options.special_ability,
        &options.character_style,
        &options.story_world,
        &options.adventure_type,
        &options.age_group,
    )
    .with(Placeholder::StoryTitle, &options.story_title)
    .with(Placeholder::ReadingLevel, reading_level);

    assemble(PromptMode::StoryText, STORY_TEXT_ORDER, defaults, |section| {
        let template = match section {
            Section::BasePrompt => text(&templates.base_prompt),
            Section::AgeRequirement => templates.age_requirement.get(age.key()),
            Section::PageStructures => {
                let pages: Vec<String> = (1..=STORY_PAGES)
                    .filter_map(|page| templates.story_structures.get(&format!("page{}", page)))
                    .map(|t| values.substitute(t))
                    .collect();
                return Ok(Some(pages.join(SECTION_SEPARATOR)));
            }
            Section::ThematicRequirement => templates.thematic_requirements.get(adventure.key()),
            Section::OccasionTheme => match occasion {
                Occasion::General => None,
                other => templates.occasion_themes.get(other.key()),
            },
            Section::WorldGuidance => templates.world_specific.get(world.key()),
            Section::ConsistencyRequirement => text(&templates.character_consistency_requirements),
            Section::OutputFormat => Some(OUTPUT_FORMAT),
            _ => None,
        };
        Ok(template.map(|t| values.substitute(t)))
    })
}

/// Illustration prompt for one story page. Negative prompts are always the
/// final section.
pub fn build_story_scene_prompt(
    document: &TemplateDocument,
    options: &StorySceneOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.story_scene()?;

    let mut defaults = DefaultTracker::new();
    let style = defaults.track(
        Dimension::CharacterStyle,
        &options.character_style,
        CharacterStyle::parse(&options.character_style),
        CharacterStyle::key,
    );
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::key,
    );

    let mut values = story_values(
        &options.character_name,
        &options.character_type,
        &options.special_ability,
        &options.character_style,
        &options.story_world,
        &options.adventure_type,
        &options.age_group,
    )
    .with(Placeholder::StoryTitle, &options.story_title)
    .with(Placeholder::StoryPageText, &options.page_text);
    if options.page_number > 0 {
        values.set(Placeholder::PageNumber, options.page_number.to_string());
    }
    let page_key = format!("page{}", options.page_number);
    let labeled = |label: &str, value: &Option<String>| {
        text(value).map(|value| format!("{}: {}", label, value.trim()))
    };

    assemble(PromptMode::StoryScene, STORY_SCENE_ORDER, defaults, |section| {
        Ok(match section {
            Section::BasePrompt => text(&templates.base_prompt).map(|t| values.substitute(t)),
            Section::ConsistencyEnforcement => {
                text(&templates.character_consistency_enforcement).map(|t| values.substitute(t))
            }
            Section::StyleSpecifications => templates
                .character_style_specifications
                .get(style.key())
                .map(|t| values.substitute(t)),
            Section::WorldPageEnvironment => {
                nested(&templates.world_specific, world.key(), &page_key)
                    .map(|t| values.substitute(t))
            }
            Section::PageRequirements => {
                text(&templates.page_specific_requirements).map(|t| values.substitute(t))
            }
            Section::SceneDescription => {
                labeled("ADDITIONAL SCENE DESCRIPTION", &options.page_scene_description)
            }
            Section::CharacterActionNote => {
                labeled("CHARACTER ACTION", &options.page_character_action)
            }
            Section::CharacterEmotion => labeled("CHARACTER EMOTION", &options.page_emotion),
            Section::CompanionCharacters => {
                labeled("COMPANION CHARACTERS", &options.companion_characters)
            }
            Section::ReferenceImage => match text(&options.character_image_url) {
                Some(_) => Some(reference_image(or_fallback(
                    &options.character_name,
                    Placeholder::CharacterName,
                ))?),
                None => None,
            },
            Section::NegativePrompts => {
                text(&templates.negative_prompts).map(|t| values.substitute(t))
            }
            _ => None,
        })
    })
}

/// Values common to the story text and story scene prompts.
fn story_values(
    character_name: &str,
    character_type: &str,
    special_ability: &str,
    character_style: &str,
    story_world: &str,
    adventure_type: &str,
    age_group: &str,
) -> PlaceholderValues {
    let adventure = AdventureType::display_for(adventure_type);
    PlaceholderValues::new()
        .with(Placeholder::CharacterName, character_name)
        .with(Placeholder::CharacterType, character_type)
        .with(Placeholder::SpecialAbility, special_ability)
        .with(Placeholder::CharacterStyle, character_style)
        .with(Placeholder::StoryWorld, StoryWorld::display_for(story_world))
        .with(Placeholder::AdventureType, adventure)
        .with(Placeholder::AdventureObjective, adventure.to_lowercase())
        .with(Placeholder::AgeGroup, age_group)
}
