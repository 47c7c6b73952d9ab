//! Character enhancement and special-ability character prompts.

use crate::domain::prompt::assembler::{DefaultTracker, assemble, assemble_joined};
use crate::domain::prompt::blocks::PRESERVATION_RULES;
use crate::domain::prompt::error::PromptAssemblyError;
use crate::domain::prompt::keys::{
    CharacterStyle, CharacterType, Dimension, EnhancementLevel, Resolved, SpecialAbility,
};
use crate::domain::prompt::options::{CharacterAbilityOptions, EnhancementOptions};
use crate::domain::prompt::placeholders::{Placeholder, PlaceholderValues};
use crate::domain::prompt::templates::{TemplateDocument, non_blank};
use crate::domain::prompt::types::{AssembledPrompt, PromptMode, Section};

/// Special-ability text is never part of an enhancement prompt; enhancement
/// only restyles the drawing the child made.
pub const ENHANCEMENT_ORDER: &[Section] = &[
    Section::EnhancementLevel,
    Section::CharacterTypeSpecs,
    Section::AdditionalCharacterTypeSpecs,
    Section::StyleSpecifications,
];

pub const CHARACTER_ABILITY_ORDER: &[Section] = &[
    Section::CharacterIntro,
    Section::SpecialAbility,
    Section::Description,
    Section::PreservationRules,
];

pub fn build_enhancement_prompt(
    document: &TemplateDocument,
    options: &EnhancementOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.enhance_character()?;

    let mut defaults = DefaultTracker::new();
    let level = defaults.track(
        Dimension::EnhancementLevel,
        &options.enhancement_level,
        EnhancementLevel::parse(&options.enhancement_level),
        EnhancementLevel::key,
    );
    let character_type = defaults.track(
        Dimension::CharacterType,
        &options.character_type,
        CharacterType::parse(&options.character_type),
        CharacterType::key,
    );
    let style = defaults.track(
        Dimension::CharacterStyle,
        &options.character_style,
        CharacterStyle::parse(&options.character_style),
        CharacterStyle::key,
    );

    let values = PlaceholderValues::new()
        .with(Placeholder::CharacterName, &options.character_name)
        .with(Placeholder::CharacterType, &options.character_type)
        .with(Placeholder::CharacterStyle, &options.character_style)
        .with(Placeholder::SpecialAbility, &options.special_ability)
        .with_opt(Placeholder::AgeGroup, options.age_group.as_deref())
        .with_opt(Placeholder::UploadedChildDrawing, options.uploaded_image_url.as_deref());

    let additional = if level.has_additional_specs() {
        templates.additional_enhancement.get(level.key())
    } else {
        None
    };

    assemble(PromptMode::Enhancement, ENHANCEMENT_ORDER, defaults, |section| {
        Ok(match section {
            Section::EnhancementLevel => {
                templates.enhancement_level.get(level.key()).map(|t| values.substitute(t))
            }
            Section::CharacterTypeSpecs => {
                templates.character_type.get(character_type.key()).map(|t| {
                    format!("CHARACTER TYPE SPECIFICATIONS:\n{}", values.substitute(t))
                })
            }
            Section::AdditionalCharacterTypeSpecs => additional
                .and_then(|extra| extra.character_type.get(character_type.key()))
                .map(|t| values.substitute(t)),
            Section::StyleSpecifications => additional
                .and_then(|extra| extra.character_style.get(style.key()))
                .map(|t| values.substitute(t)),
            _ => None,
        })
    })
}

/// Prompt for drawing the character with its special ability.
///
/// Unrecognized abilities are custom abilities: the caller's text is used as-is.
/// The sections form one line joined by single spaces, which is the form the
/// image edit endpoint receives.
pub fn build_character_ability_prompt(
    document: &TemplateDocument,
    options: &CharacterAbilityOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.enhance_character()?;
    let character_type = options.character_type.as_deref().and_then(non_blank);
    let ability = options.special_ability.as_deref().and_then(non_blank);
    let description = options.description.as_deref().and_then(non_blank);

    let order = CHARACTER_ABILITY_ORDER;
    assemble_joined(PromptMode::CharacterAbility, order, " ", DefaultTracker::new(), |section| {
        Ok(match section {
            Section::CharacterIntro => character_type.map(|raw| {
                let phrase = match CharacterType::parse(raw) {
                    Resolved::Recognized(kind) => kind.phrase().to_string(),
                    Resolved::Defaulted(_) => raw.trim().to_string(),
                };
                format!("The character is {}.", phrase)
            }),
            Section::SpecialAbility => ability.map(|raw| {
                let key = SpecialAbility::parse(raw).value().key();
                templates.special_ability.get(key).unwrap_or(raw).trim().to_string()
            }),
            Section::Description => description.map(|text| text.trim().to_string()),
            Section::PreservationRules => Some(character_ability_negative_prompt()),
            _ => None,
        })
    })
}

/// One-line description of an enhancement request, for logs and listings.
pub fn prompt_summary(options: &EnhancementOptions) -> String {
    format!(
        "Character: {} ({}), Style: {}, Ability: {}, Level: {}",
        options.character_name,
        options.character_type,
        options.character_style,
        options.special_ability,
        options.enhancement_level
    )
}

/// Value for the `negative_prompt` request field of a character-ability request.
pub fn character_ability_negative_prompt() -> String {
    PRESERVATION_RULES.join(" ")
}
