use crate::domain::prompt::assembler::{DefaultTracker, assemble};
use crate::domain::prompt::blocks::{SceneInformation, scene_information};
use crate::domain::prompt::error::PromptAssemblyError;
use crate::domain::prompt::keys::{CharacterStyle, Difficulty, Dimension, Resolved, StoryWorld};
use crate::domain::prompt::options::{SearchAdventureOptions, SearchSceneContextOptions};
use crate::domain::prompt::placeholders::Placeholder;
use crate::domain::prompt::templates::{TemplateDocument, nested, non_blank, text};
use crate::domain::prompt::types::{AssembledPrompt, PromptMode, Section};

use super::cover::search_values;
use super::or_fallback;

pub const SEARCH_SCENE_ORDER: &[Section] = &[
    Section::SceneInformation,
    Section::BasePrompt,
    Section::BaseStyleSpecifications,
    Section::StyleSpecifications,
    Section::ComplexityRequirements,
    Section::CharacterAction,
    Section::WorldScene,
];

/// One scene of an interactive search book.
///
/// A scene number of zero counts as scene 1. Numbers past the last scene in
/// the document leave the action and world sections out.
pub fn build_search_scene_prompt(
    document: &TemplateDocument,
    options: &SearchAdventureOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.search_adventure()?;

    let mut defaults = DefaultTracker::new();
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::key,
    );
    let difficulty = defaults.track(
        Dimension::Difficulty,
        &options.difficulty,
        Difficulty::parse(&options.difficulty),
        Difficulty::key,
    );
    let style = match CharacterStyle::parse(&options.character_style) {
        Resolved::Recognized(style) => Some(style),
        Resolved::Defaulted(_) => {
            defaults.record(Dimension::CharacterStyle, &options.character_style, "base");
            None
        }
    };

    let scene_number = options.scene_number.max(1);
    let scene_key = format!("scene{}", scene_number);
    let values = search_values(options);

    let title = options.story_title.as_deref().unwrap_or_default();
    let header = SceneInformation {
        scene_number,
        title: or_fallback(title, Placeholder::StoryTitle),
        world: or_fallback(StoryWorld::display_for(&options.story_world), Placeholder::StoryWorld),
        character_name: or_fallback(&options.character_name, Placeholder::CharacterName),
        character_type: or_fallback(&options.character_type, Placeholder::CharacterType),
        art_style: or_fallback(&options.character_style, Placeholder::CharacterStyle),
        special_ability: non_blank(options.special_ability.trim()),
        age_group: or_fallback(&options.age_group, Placeholder::AgeGroup),
        difficulty: Some(difficulty.key()),
        scene_title: None,
    };

    assemble(PromptMode::SearchScene, SEARCH_SCENE_ORDER, defaults, |section| {
        let rendered = match section {
            Section::SceneInformation => return Ok(Some(scene_information(&header)?)),
            Section::BasePrompt => text(&templates.base_prompt),
            Section::BaseStyleSpecifications => templates.style_specifications.get("base"),
            Section::StyleSpecifications => {
                style.and_then(|style| templates.style_specifications.get(style.key()))
            }
            Section::ComplexityRequirements => {
                templates.complexity_requirements.get(difficulty.key())
            }
            Section::CharacterAction => templates.character_actions.get(&scene_key),
            Section::WorldScene => {
                return Ok(nested(&templates.world_specific, world.key(), &scene_key)
                    .map(|t| format!("WORLD-SPECIFIC SCENE:\n{}", values.substitute(t))));
            }
            _ => None,
        };
        Ok(rendered.map(|t| values.substitute(t)))
    })
}

pub const SEARCH_SCENE_CONTEXT_ORDER: &[Section] = &[
    Section::SceneInformation,
    Section::SceneNarrative,
    Section::SceneDescription,
    Section::CharacterActionNote,
    Section::CharacterEmotion,
    Section::StoryContinuation,
];

/// Header and narrative notes for one search scene, without the art direction.
///
/// Each note is written as `<label>: <text>` and left out when blank. The
/// narrative heading only appears when at least one note does.
pub fn build_search_scene_context_prompt(
    document: &TemplateDocument,
    options: &SearchSceneContextOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.search_scene_context()?;

    let mut defaults = DefaultTracker::new();
    defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::key,
    );

    let header = SceneInformation {
        scene_number: options.scene_number.max(1),
        title: or_fallback(&options.story_title, Placeholder::StoryTitle),
        world: or_fallback(StoryWorld::display_for(&options.story_world), Placeholder::StoryWorld),
        character_name: or_fallback(&options.character_name, Placeholder::CharacterName),
        character_type: or_fallback(&options.character_type, Placeholder::CharacterType),
        art_style: or_fallback(&options.character_style, Placeholder::CharacterStyle),
        special_ability: non_blank(options.special_ability.trim()),
        age_group: or_fallback(&options.age_group, Placeholder::AgeGroup),
        difficulty: None,
        scene_title: non_blank(options.scene_title.trim()),
    };

    let notes = [
        (&templates.scene_setting, &options.scene_description),
        (&templates.character_action, &options.character_action_for_scene),
        (&templates.character_emotion, &options.character_emotion_for_scene),
        (&templates.story_context, &options.story_continuation_for_this_scene),
    ]
    .map(|(label, value)| labelled(text(label), value));
    let has_notes = notes.iter().any(Option::is_some);
    let [setting, action, emotion, continuation] = notes;

    let order = SEARCH_SCENE_CONTEXT_ORDER;
    assemble(PromptMode::SearchSceneContext, order, defaults, |section| {
        Ok(match section {
            Section::SceneInformation => Some(scene_information(&header)?),
            Section::SceneNarrative if has_notes => text(&templates.heading).map(str::to_string),
            Section::SceneDescription => setting.clone(),
            Section::CharacterActionNote => action.clone(),
            Section::CharacterEmotion => emotion.clone(),
            Section::StoryContinuation => continuation.clone(),
            _ => None,
        })
    })
}

fn labelled(label: Option<&str>, value: &str) -> Option<String> {
    let value = non_blank(value.trim())?;
    Some(match label {
        Some(label) => format!("{}: {}", label.trim(), value),
        None => value.to_string(),
    })
}
