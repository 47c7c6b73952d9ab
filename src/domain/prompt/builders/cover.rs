//! Front covers for adventure storybooks and interactive search books.

use crate::domain::prompt::assembler::{DefaultTracker, assemble};
use crate::domain::prompt::blocks::{
    ADVENTURE_BOOK_FORMAT, BookInformation, SEARCH_BOOK_FORMAT, book_information,
};
use crate::domain::prompt::error::PromptAssemblyError;
use crate::domain::prompt::keys::{CharacterStyle, Dimension, Resolved, StoryWorld};
use crate::domain::prompt::options::{AdventureCoverOptions, SearchAdventureOptions};
use crate::domain::prompt::placeholders::{Placeholder, PlaceholderValues};
use crate::domain::prompt::templates::{TemplateDocument, text};
use crate::domain::prompt::types::{AssembledPrompt, PromptMode, Section};

use super::or_fallback;

pub const ADVENTURE_COVER_ORDER: &[Section] = &[
    Section::BookInformation,
    Section::BasePrompt,
    Section::StyleSpecifications,
    Section::CoverEnvironment,
];

pub const SEARCH_COVER_ORDER: &[Section] = &[
    Section::BookInformation,
    Section::BasePrompt,
    Section::CoverEnvironment,
    Section::StyleSpecifications,
];

/// Style entry used by search covers when the style is not recognized.
const BASE_STYLE_KEY: &str = "base";

pub fn build_adventure_cover_prompt(
    document: &TemplateDocument,
    options: &AdventureCoverOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.adventure_cover()?;

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

    let values = PlaceholderValues::new()
        .with(Placeholder::StoryTitle, &options.story_title)
        .with(Placeholder::CharacterName, &options.character_name)
        .with(Placeholder::CharacterType, &options.character_type)
        .with(Placeholder::CharacterStyle, &options.character_style)
        .with(Placeholder::SpecialAbility, &options.special_ability)
        .with(Placeholder::StoryWorld, StoryWorld::display_for(&options.story_world))
        .with(Placeholder::AgeGroup, &options.age_group)
        .with_opt(
            Placeholder::CharacterReferenceImage,
            options.character_reference_image.as_deref(),
        );

    let header = BookInformation {
        title: or_fallback(&options.story_title, Placeholder::StoryTitle),
        format: ADVENTURE_BOOK_FORMAT,
        character_name: or_fallback(&options.character_name, Placeholder::CharacterName),
        character_type: or_fallback(&options.character_type, Placeholder::CharacterType),
        world: or_fallback(StoryWorld::display_for(&options.story_world), Placeholder::StoryWorld),
        art_style: or_fallback(&options.character_style, Placeholder::CharacterStyle),
        age_group: or_fallback(&options.age_group, Placeholder::AgeGroup),
    };

    assemble(PromptMode::AdventureCover, ADVENTURE_COVER_ORDER, defaults, |section| {
        Ok(match section {
            Section::BookInformation => Some(book_information(&header)?),
            Section::BasePrompt => text(&templates.base_prompt).map(|t| values.substitute(t)),
            Section::StyleSpecifications => {
                templates.style_specifications.get(style.key()).map(|t| values.substitute(t))
            }
            Section::CoverEnvironment => {
                templates.cover_environment.get(world.key()).map(|t| values.substitute(t))
            }
            _ => None,
        })
    })
}

/// Cover for an interactive search book.
///
/// `{character_description}` takes the special ability text, and an
/// unrecognized style selects the `base` style entry.
pub fn build_search_cover_prompt(
    document: &TemplateDocument,
    options: &SearchAdventureOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.search_cover()?;

    let mut defaults = DefaultTracker::new();
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::key,
    );
    let style_key = match CharacterStyle::parse(&options.character_style) {
        Resolved::Recognized(style) => style.key(),
        Resolved::Defaulted(_) => {
            defaults.record(Dimension::CharacterStyle, &options.character_style, BASE_STYLE_KEY);
            BASE_STYLE_KEY
        }
    };

    let title = options.story_title.as_deref().unwrap_or_default();
    let values = search_values(options)
        .with(Placeholder::CharacterDescription, &options.special_ability);

    let header = BookInformation {
        title: or_fallback(title, Placeholder::StoryTitle),
        format: SEARCH_BOOK_FORMAT,
        character_name: or_fallback(&options.character_name, Placeholder::CharacterName),
        character_type: or_fallback(&options.character_type, Placeholder::CharacterType),
        world: or_fallback(StoryWorld::display_for(&options.story_world), Placeholder::StoryWorld),
        art_style: or_fallback(&options.character_style, Placeholder::CharacterStyle),
        age_group: or_fallback(&options.age_group, Placeholder::AgeGroup),
    };

    assemble(PromptMode::SearchCover, SEARCH_COVER_ORDER, defaults, |section| {
        Ok(match section {
            Section::BookInformation => Some(book_information(&header)?),
            Section::BasePrompt => text(&templates.base_prompt).map(|t| values.substitute(t)),
            Section::CoverEnvironment => {
                templates.cover_environment.get(world.key()).map(|t| values.substitute(t))
            }
            Section::StyleSpecifications => templates
                .character_style_specifications
                .get(style_key)
                .map(|t| values.substitute(t)),
            _ => None,
        })
    })
}

/// Placeholder values shared by the search cover and search scene builders.
pub(crate) fn search_values(options: &SearchAdventureOptions) -> PlaceholderValues {
    PlaceholderValues::new()
        .with(Placeholder::CharacterName, &options.character_name)
        .with(Placeholder::CharacterType, &options.character_type)
        .with(Placeholder::CharacterStyle, &options.character_style)
        .with(Placeholder::SpecialAbility, &options.special_ability)
        .with(Placeholder::AgeGroup, &options.age_group)
        .with(Placeholder::StoryWorld, StoryWorld::display_for(&options.story_world))
        .with_opt(Placeholder::StoryTitle, options.story_title.as_deref())
        .with_opt(
            Placeholder::CharacterReferenceImage,
            options.character_reference_image.as_deref(),
        )
}
