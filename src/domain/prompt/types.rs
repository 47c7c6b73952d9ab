use std::fmt;
use std::str::FromStr;

use super::error::PromptAssemblyError;
use super::keys::Dimension;

/// Generation task selecting a template sub-tree and a section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptMode {
    Enhancement,
    CharacterAbility,
    Environment,
    AdventureScene,
    AdventureCover,
    SearchCover,
    SearchScene,
    SearchSceneContext,
    StoryText,
    StoryScene,
    Dedication,
}

impl PromptMode {
    pub const ALL: [PromptMode; 11] = [
        Self::Enhancement,
        Self::CharacterAbility,
        Self::Environment,
        Self::AdventureScene,
        Self::AdventureCover,
        Self::SearchCover,
        Self::SearchScene,
        Self::SearchSceneContext,
        Self::StoryText,
        Self::StoryScene,
        Self::Dedication,
    ];

    /// Command-line name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enhancement => "enhancement",
            Self::CharacterAbility => "character-ability",
            Self::Environment => "environment",
            Self::AdventureScene => "adventure-scene",
            Self::AdventureCover => "adventure-cover",
            Self::SearchCover => "search-cover",
            Self::SearchScene => "search-scene",
            Self::SearchSceneContext => "search-scene-context",
            Self::StoryText => "story-text",
            Self::StoryScene => "story-scene",
            Self::Dedication => "dedication",
        }
    }

    /// Top-level key of the template document the mode reads.
    pub fn document_key(&self) -> &'static str {
        match self {
            Self::Enhancement | Self::CharacterAbility => "enhanceCharacter",
            Self::Environment => "placeEnvironment",
            Self::AdventureScene => "adventureScene",
            Self::AdventureCover => "generateAdventureBook.cover",
            Self::SearchCover => "generateSearchAdventure.cover",
            Self::SearchScene => "generateSearchAdventure",
            Self::SearchSceneContext => "generateSearchAdventure.sceneContext",
            Self::StoryText => "generateStoryText",
            Self::StoryScene => "generateStoryScene",
            Self::Dedication => "generateDedicationScene",
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptMode {
    type Err = PromptAssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| PromptAssemblyError::UnknownMode(s.to_string()))
    }
}

/// A named slot in a mode's fixed section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    BookInformation,
    SceneInformation,
    EnhancementLevel,
    CharacterTypeSpecs,
    AdditionalCharacterTypeSpecs,
    CharacterIntro,
    SpecialAbility,
    Description,
    PreservationRules,
    EnvironmentPlacement,
    AdventureScene,
    BasePrompt,
    BaseStyleSpecifications,
    StyleSpecifications,
    CoverEnvironment,
    ComplexityRequirements,
    CharacterAction,
    WorldScene,
    AgeRequirement,
    PageStructures,
    ThematicRequirement,
    OccasionTheme,
    WorldGuidance,
    ConsistencyRequirement,
    OutputFormat,
    ConsistencyEnforcement,
    WorldPageEnvironment,
    PageRequirements,
    SceneDescription,
    CharacterActionNote,
    CharacterEmotion,
    SceneNarrative,
    StoryContinuation,
    CompanionCharacters,
    ReferenceImage,
    NegativePrompts,
    Dedication,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BookInformation => "book_information",
            Self::SceneInformation => "scene_information",
            Self::EnhancementLevel => "enhancement_level",
            Self::CharacterTypeSpecs => "character_type_specs",
            Self::AdditionalCharacterTypeSpecs => "additional_character_type_specs",
            Self::CharacterIntro => "character_intro",
            Self::SpecialAbility => "special_ability",
            Self::Description => "description",
            Self::PreservationRules => "preservation_rules",
            Self::EnvironmentPlacement => "environment_placement",
            Self::AdventureScene => "adventure_scene",
            Self::BasePrompt => "base_prompt",
            Self::BaseStyleSpecifications => "base_style_specifications",
            Self::StyleSpecifications => "style_specifications",
            Self::CoverEnvironment => "cover_environment",
            Self::ComplexityRequirements => "complexity_requirements",
            Self::CharacterAction => "character_action",
            Self::WorldScene => "world_scene",
            Self::AgeRequirement => "age_requirement",
            Self::PageStructures => "page_structures",
            Self::ThematicRequirement => "thematic_requirement",
            Self::OccasionTheme => "occasion_theme",
            Self::WorldGuidance => "world_guidance",
            Self::ConsistencyRequirement => "consistency_requirement",
            Self::OutputFormat => "output_format",
            Self::ConsistencyEnforcement => "consistency_enforcement",
            Self::WorldPageEnvironment => "world_page_environment",
            Self::PageRequirements => "page_requirements",
            Self::SceneDescription => "scene_description",
            Self::CharacterActionNote => "character_action_note",
            Self::CharacterEmotion => "character_emotion",
            Self::SceneNarrative => "scene_narrative",
            Self::StoryContinuation => "story_continuation",
            Self::CompanionCharacters => "companion_characters",
            Self::ReferenceImage => "reference_image",
            Self::NegativePrompts => "negative_prompts",
            Self::Dedication => "dedication",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dimension input that matched no alias and was replaced by the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultedInput {
    pub dimension: Dimension,
    /// Caller-supplied text.
    pub input: String,
    /// Canonical key used instead.
    pub used: &'static str,
}

/// Result of prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub mode: PromptMode,

    /// The fully assembled prompt text.
    pub content: String,

    /// Sections that contributed text, in output order.
    pub included: Vec<Section>,

    /// Sections that were empty or absent from the document.
    pub skipped: Vec<Section>,

    /// Dimension inputs that fell back to a default key.
    pub defaulted: Vec<DefaultedInput>,
}

impl AssembledPrompt {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl fmt::Display for AssembledPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_from_cli_names() {
        assert_eq!("story-text".parse::<PromptMode>().unwrap(), PromptMode::StoryText);
        assert_eq!("SEARCH_SCENE".parse::<PromptMode>().unwrap(), PromptMode::SearchScene);
        assert_eq!(
            "search_scene_context".parse::<PromptMode>().unwrap(),
            PromptMode::SearchSceneContext
        );
        assert!(matches!(
            "poster".parse::<PromptMode>(),
            Err(PromptAssemblyError::UnknownMode(name)) if name == "poster"
        ));
    }

    #[test]
    fn every_mode_round_trips_through_its_name() {
        for mode in PromptMode::ALL {
            assert_eq!(mode.name().parse::<PromptMode>().unwrap(), mode);
        }
    }
}
