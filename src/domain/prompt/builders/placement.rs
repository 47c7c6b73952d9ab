//! Single-template prompts that place an enhanced character into a world.

use crate::domain::prompt::assembler::{DefaultTracker, assemble};
use crate::domain::prompt::error::PromptAssemblyError;
use crate::domain::prompt::keys::{AdventureType, Dimension, StoryWorld};
use crate::domain::prompt::options::{AdventureSceneOptions, EnvironmentOptions};
use crate::domain::prompt::placeholders::{Placeholder, PlaceholderValues};
use crate::domain::prompt::templates::{TemplateDocument, nested};
use crate::domain::prompt::types::{AssembledPrompt, PromptMode, Section};

const FALLBACK_WORLD: &str = "forest";
const FALLBACK_ADVENTURE: &str = "treasureHunt";

pub fn build_environment_prompt(
    document: &TemplateDocument,
    options: &EnvironmentOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.place_environment()?;

    let mut defaults = DefaultTracker::new();
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::short_key,
    );
    let values = PlaceholderValues::new()
        .with_opt(Placeholder::CharacterName, options.character_name.as_deref())
        .with(Placeholder::StoryWorld, StoryWorld::display_for(&options.story_world));

    assemble(PromptMode::Environment, &[Section::EnvironmentPlacement], defaults, |_| {
        Ok(templates
            .get(world.short_key())
            .or_else(|| templates.get(FALLBACK_WORLD))
            .map(|t| values.substitute(t)))
    })
}

pub fn build_adventure_scene_prompt(
    document: &TemplateDocument,
    options: &AdventureSceneOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.adventure_scene()?;

    let mut defaults = DefaultTracker::new();
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::short_key,
    );
    let adventure = defaults.track(
        Dimension::AdventureType,
        &options.adventure_type,
        AdventureType::parse(&options.adventure_type),
        AdventureType::key,
    );
    let values = PlaceholderValues::new()
        .with_opt(Placeholder::CharacterName, options.character_name.as_deref())
        .with_opt(Placeholder::SpecialAbility, options.special_ability.as_deref())
        .with(Placeholder::StoryWorld, StoryWorld::display_for(&options.story_world))
        .with(Placeholder::AdventureType, AdventureType::display_for(&options.adventure_type))
        .with(
            Placeholder::AdventureObjective,
            AdventureType::display_for(&options.adventure_type).to_lowercase(),
        );

    assemble(PromptMode::AdventureScene, &[Section::AdventureScene], defaults, |_| {
        Ok(nested(templates, world.short_key(), adventure.key())
            .or_else(|| nested(templates, FALLBACK_WORLD, FALLBACK_ADVENTURE))
            .map(|t| values.substitute(t)))
    })
}
