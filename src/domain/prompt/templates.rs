//! Typed model of the prompt template document.
//!
//! Every mode is an optional sub-tree so a document missing a mode still
//! parses; the builder for that mode reports the gap when it runs.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::PromptAssemblyError;
use super::types::PromptMode;

/// Variant key to template text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Variants(BTreeMap<String, String>);

impl Variants {
    /// Template text for `key`, or `None` when absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).and_then(non_blank)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variants {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Two-level lookup such as world -> page -> text.
pub type VariantGroups = BTreeMap<String, Variants>;

pub(crate) fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() { None } else { Some(text) }
}

pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

pub(crate) fn nested<'a>(groups: &'a VariantGroups, outer: &str, inner: &str) -> Option<&'a str> {
    groups.get(outer).and_then(|variants| variants.get(inner))
}

/// The whole template document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    #[serde(default)]
    pub enhance_character: Option<EnhanceCharacterTemplates>,
    #[serde(default)]
    pub place_environment: Option<Variants>,
    #[serde(default)]
    pub adventure_scene: Option<VariantGroups>,
    #[serde(default)]
    pub generate_adventure_book: Option<AdventureBookTemplates>,
    #[serde(default)]
    pub generate_search_adventure: Option<SearchAdventureTemplates>,
    #[serde(default)]
    pub generate_story_text: Option<StoryTextTemplates>,
    #[serde(default)]
    pub generate_story_scene: Option<StorySceneTemplates>,
    #[serde(default)]
    pub generate_dedication_scene: Option<Variants>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhanceCharacterTemplates {
    pub enhancement_level: Variants,
    pub character_type: Variants,
    pub special_ability: Variants,
    /// Keyed by enhancement level; `minimal` normally has no entry.
    pub additional_enhancement: BTreeMap<String, AdditionalEnhancement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalEnhancement {
    pub character_type: Variants,
    pub character_style: Variants,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdventureBookTemplates {
    pub cover: Option<AdventureCoverTemplates>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdventureCoverTemplates {
    pub base_prompt: Option<String>,
    pub style_specifications: Variants,
    pub cover_environment: Variants,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchAdventureTemplates {
    pub base_prompt: Option<String>,
    pub complexity_requirements: Variants,
    /// Holds `base` plus one entry per art style.
    pub style_specifications: Variants,
    pub character_actions: Variants,
    pub world_specific: VariantGroups,
    pub cover: Option<SearchCoverTemplates>,
    pub scene_context: Option<SceneContextTemplates>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCoverTemplates {
    pub base_prompt: Option<String>,
    pub cover_environment: Variants,
    pub character_style_specifications: Variants,
}

/// Heading and field labels of a search scene's narrative block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneContextTemplates {
    pub heading: Option<String>,
    pub scene_setting: Option<String>,
    pub character_action: Option<String>,
    pub character_emotion: Option<String>,
    pub story_context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryTextTemplates {
    pub base_prompt: Option<String>,
    pub age_requirement: Variants,
    pub story_structures: Variants,
    pub thematic_requirements: Variants,
    pub occasion_themes: Variants,
    pub world_specific: Variants,
    pub character_consistency_requirements: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorySceneTemplates {
    pub base_prompt: Option<String>,
    pub character_consistency_enforcement: Option<String>,
    pub character_style_specifications: Variants,
    pub world_specific: VariantGroups,
    pub page_specific_requirements: Option<String>,
    pub negative_prompts: Option<String>,
}

const BUNDLED_DOCUMENT: &str = include_str!("../../../assets/prompt_templates.json");

impl TemplateDocument {
    /// Parse a template document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The document shipped with the crate.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_DOCUMENT)
    }

    pub fn has_mode(&self, mode: PromptMode) -> bool {
        match mode {
            PromptMode::Enhancement | PromptMode::CharacterAbility => {
                self.enhance_character.is_some()
            }
            PromptMode::Environment => self.place_environment.is_some(),
            PromptMode::AdventureScene => self.adventure_scene.is_some(),
            PromptMode::AdventureCover => {
                self.generate_adventure_book.as_ref().is_some_and(|book| book.cover.is_some())
            }
            PromptMode::SearchCover => {
                self.generate_search_adventure.as_ref().is_some_and(|search| search.cover.is_some())
            }
            PromptMode::SearchScene => self.generate_search_adventure.is_some(),
            PromptMode::SearchSceneContext => self
                .generate_search_adventure
                .as_ref()
                .is_some_and(|search| search.scene_context.is_some()),
            PromptMode::StoryText => self.generate_story_text.is_some(),
            PromptMode::StoryScene => self.generate_story_scene.is_some(),
            PromptMode::Dedication => self.generate_dedication_scene.is_some(),
        }
    }

    pub(crate) fn enhance_character(
        &self,
    ) -> Result<&EnhanceCharacterTemplates, PromptAssemblyError> {
        self.enhance_character
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("enhanceCharacter"))
    }

    pub(crate) fn place_environment(&self) -> Result<&Variants, PromptAssemblyError> {
        self.place_environment
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("placeEnvironment"))
    }

    pub(crate) fn adventure_scene(&self) -> Result<&VariantGroups, PromptAssemblyError> {
        self.adventure_scene
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("adventureScene"))
    }

    pub(crate) fn adventure_cover(&self) -> Result<&AdventureCoverTemplates, PromptAssemblyError> {
        let book = self
            .generate_adventure_book
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateAdventureBook"))?;
        book.cover
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateAdventureBook.cover"))
    }

    pub(crate) fn search_adventure(
        &self,
    ) -> Result<&SearchAdventureTemplates, PromptAssemblyError> {
        self.generate_search_adventure
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateSearchAdventure"))
    }

    pub(crate) fn search_cover(&self) -> Result<&SearchCoverTemplates, PromptAssemblyError> {
        self.search_adventure()?
            .cover
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateSearchAdventure.cover"))
    }

    pub(crate) fn search_scene_context(
        &self,
    ) -> Result<&SceneContextTemplates, PromptAssemblyError> {
        self.search_adventure()?.scene_context.as_ref().ok_or_else(|| {
            PromptAssemblyError::mode_not_found("generateSearchAdventure.sceneContext")
        })
    }

    pub(crate) fn story_text(&self) -> Result<&StoryTextTemplates, PromptAssemblyError> {
        self.generate_story_text
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateStoryText"))
    }

    pub(crate) fn story_scene(&self) -> Result<&StorySceneTemplates, PromptAssemblyError> {
        self.generate_story_scene
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateStoryScene"))
    }

    pub(crate) fn dedication_scene(&self) -> Result<&Variants, PromptAssemblyError> {
        self.generate_dedication_scene
            .as_ref()
            .ok_or_else(|| PromptAssemblyError::mode_not_found("generateDedicationScene"))
    }
}
