//! Per-mode builder options.
//!
//! Dimension fields are free-form strings; builders map them onto canonical
//! keys. Field names deserialize from camelCase JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnhancementOptions {
    pub character_name: String,
    pub character_type: String,
    pub character_style: String,
    pub special_ability: String,
    pub enhancement_level: String,
    pub age_group: Option<String>,
    pub uploaded_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CharacterAbilityOptions {
    pub character_type: Option<String>,
    pub special_ability: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EnvironmentOptions {
    pub story_world: String,
    pub character_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AdventureSceneOptions {
    pub story_world: String,
    pub adventure_type: String,
    pub character_name: Option<String>,
    pub special_ability: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AdventureCoverOptions {
    pub story_title: String,
    pub character_name: String,
    pub character_type: String,
    pub character_style: String,
    pub special_ability: String,
    pub story_world: String,
    pub age_group: String,
    pub character_reference_image: Option<String>,
}

/// Options shared by the interactive-search cover and scene builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchAdventureOptions {
    pub character_name: String,
    pub character_type: String,
    pub character_style: String,
    pub special_ability: String,
    pub story_world: String,
    pub age_group: String,
    pub difficulty: String,
    /// 1 through 4.
    pub scene_number: u32,
    pub character_reference_image: Option<String>,
    pub story_title: Option<String>,
}

/// Header fields and narrative notes for one interactive-search scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchSceneContextOptions {
    /// 1 through 4.
    pub scene_number: u32,
    pub story_title: String,
    pub story_world: String,
    pub character_name: String,
    pub character_type: String,
    pub character_style: String,
    pub special_ability: String,
    pub age_group: String,
    pub scene_title: String,
    pub scene_description: String,
    pub character_action_for_scene: String,
    pub character_emotion_for_scene: String,
    pub story_continuation_for_this_scene: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StoryTextOptions {
    pub character_name: String,
    pub character_type: String,
    pub special_ability: String,
    pub character_style: String,
    pub story_world: String,
    pub adventure_type: String,
    pub occasion_theme: String,
    pub age_group: String,
    pub reading_level: Option<String>,
    pub story_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StorySceneOptions {
    pub character_name: String,
    pub character_type: String,
    pub special_ability: String,
    pub character_style: String,
    pub story_world: String,
    pub adventure_type: String,
    pub age_group: String,
    pub story_title: String,
    /// 1 through 5.
    pub page_number: u32,
    pub page_text: String,
    pub page_scene_description: Option<String>,
    pub page_character_action: Option<String>,
    pub page_emotion: Option<String>,
    pub companion_characters: Option<String>,
    pub character_image_url: Option<String>,
}

/// Options for the dedication page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DedicationOptions {
    pub story_world: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: StorySceneOptions = serde_json::from_str(
            r#"{"characterName": "Ruby", "pageNumber": 2, "characterImageUrl": "https://img/ruby.png"}"#,
        )
        .unwrap();
        assert_eq!(options.character_name, "Ruby");
        assert_eq!(options.page_number, 2);
        assert_eq!(options.character_image_url.as_deref(), Some("https://img/ruby.png"));
        assert_eq!(options.page_emotion, None);
    }

    #[test]
    fn scene_context_fields_keep_their_long_names() {
        let options: SearchSceneContextOptions = serde_json::from_str(
            r#"{"sceneNumber": 3, "characterActionForScene": "waving",
                "storyContinuationForThisScene": "The tide turns."}"#,
        )
        .unwrap();
        assert_eq!(options.scene_number, 3);
        assert_eq!(options.character_action_for_scene, "waving");
        assert_eq!(options.story_continuation_for_this_scene, "The tide turns.");
        assert!(options.scene_title.is_empty());
    }

    #[test]
    fn unknown_option_fields_are_rejected() {
        let err = serde_json::from_str::<EnhancementOptions>(r#"{"charName": "Ruby"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }
}
