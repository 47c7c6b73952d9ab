//! Built-in text blocks that are part of the code, not the template document.

use minijinja::{Environment, UndefinedBehavior, Value};

use super::error::PromptAssemblyError;

const BOOK_INFORMATION: &str = r#"BOOK INFORMATION:
 - Book Title: "{{ title }}"
 - Format: {{ format }}
 - Character: {{ character_name }}, a {{ character_type }}
 - World: {{ world }} (Enchanted Forest / Outer Space / Underwater Kingdom)
 - Art Style: {{ art_style }}
 - Target Age Group: {{ age_group }}"#;

const SCENE_INFORMATION: &str = r#"SCENE INFORMATION:
- Scene Number: {{ scene_number }} (1-4)
- Book Title: "{{ title }}"
- World: {{ world }} (Enchanted Forest / Outer Space / Underwater Kingdom)
- Character to Find: {{ character_name }}, a {{ character_type }}
- Character Style: {{ art_style }}
{%- if special_ability %}
- Character Special Ability: {{ special_ability }}
{%- endif %}
- Target Age Group: {{ age_group }}
{%- if difficulty %}
- Difficulty: {{ difficulty }}
{%- endif %}
{%- if scene_title %}
- Scene Title: "{{ scene_title }}"
{%- endif %}"#;

const REFERENCE_IMAGE: &str = r#"CHARACTER REFERENCE IMAGE:
- A reference image of {{ character_name }} is provided
- Use this reference image to maintain consistent character appearance across all scenes
- The character in the scene must match the appearance, style, and features shown in the reference image
- Keep the character's visual identity consistent with the reference image"#;

/// Fixed page layout the story-text response must follow.
pub const OUTPUT_FORMAT: &str = "OUTPUT FORMAT:
Format the output as:
PAGE 1:
[content]

PAGE 2:
[content]

PAGE 3:
[content]

PAGE 4:
[content]

PAGE 5:
[content]";

/// Instructions that keep a generated character faithful to the input drawing.
pub const PRESERVATION_RULES: [&str; 2] = [
    "Don't add any other character except the input character.",
    "Keep the appearance features of the input character.",
];

pub const ADVENTURE_BOOK_FORMAT: &str = "Adventure Storybook";
pub const SEARCH_BOOK_FORMAT: &str = "Interactive Search Book (Where's Waldo style)";

/// Fields of the book-information header.
#[derive(Debug, Clone)]
pub struct BookInformation<'a> {
    pub title: &'a str,
    pub format: &'a str,
    pub character_name: &'a str,
    pub character_type: &'a str,
    pub world: &'a str,
    pub art_style: &'a str,
    pub age_group: &'a str,
}

pub fn book_information(info: &BookInformation<'_>) -> Result<String, PromptAssemblyError> {
    render(
        "book_information",
        BOOK_INFORMATION,
        minijinja::context! {
            title => info.title,
            format => info.format,
            character_name => info.character_name,
            character_type => info.character_type,
            world => info.world,
            art_style => info.art_style,
            age_group => info.age_group,
        },
    )
}

/// Header of one interactive-search scene.
///
/// Optional lines are left out when their field is `None`.
#[derive(Debug, Clone)]
pub struct SceneInformation<'a> {
    pub scene_number: u32,
    pub title: &'a str,
    pub world: &'a str,
    pub character_name: &'a str,
    pub character_type: &'a str,
    pub art_style: &'a str,
    pub special_ability: Option<&'a str>,
    pub age_group: &'a str,
    pub difficulty: Option<&'a str>,
    pub scene_title: Option<&'a str>,
}

pub fn scene_information(info: &SceneInformation<'_>) -> Result<String, PromptAssemblyError> {
    render(
        "scene_information",
        SCENE_INFORMATION,
        minijinja::context! {
            scene_number => info.scene_number,
            title => info.title,
            world => info.world,
            character_name => info.character_name,
            character_type => info.character_type,
            art_style => info.art_style,
            special_ability => optional(info.special_ability),
            age_group => info.age_group,
            difficulty => optional(info.difficulty),
            scene_title => optional(info.scene_title),
        },
    )
}

pub fn reference_image(character_name: &str) -> Result<String, PromptAssemblyError> {
    render("reference_image", REFERENCE_IMAGE, minijinja::context! { character_name })
}

// Strict rendering rejects undefined values in `if` tests, so absent lines are none.
fn optional(text: Option<&str>) -> Value {
    text.map_or_else(|| Value::from(()), Value::from)
}

fn render(block: &str, source: &str, context: Value) -> Result<String, PromptAssemblyError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(source, context).map_err(|err| PromptAssemblyError::BlockRender {
        block: block.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> BookInformation<'static> {
        BookInformation {
            title: "Ruby's Big Day",
            format: ADVENTURE_BOOK_FORMAT,
            character_name: "Ruby",
            character_type: "animal",
            world: "Outer Space",
            art_style: "cartoon",
            age_group: "3-6",
        }
    }

    fn scene() -> SceneInformation<'static> {
        SceneInformation {
            scene_number: 2,
            title: "Where is Milo?",
            world: "Underwater Kingdom",
            character_name: "Milo",
            character_type: "person",
            art_style: "3d",
            special_ability: Some("invisibility"),
            age_group: "7-10",
            difficulty: None,
            scene_title: None,
        }
    }

    #[test]
    fn book_information_lists_every_field() {
        let text = book_information(&info()).unwrap();
        assert!(text.starts_with("BOOK INFORMATION:\n - Book Title: \"Ruby's Big Day\""));
        assert!(text.contains(" - Format: Adventure Storybook\n - Character: Ruby, a animal"));
        assert!(text.contains(" - World: Outer Space (Enchanted Forest"));
        assert!(text.ends_with(" - Target Age Group: 3-6"));
        assert!(!text.contains("Scene Number"));
    }

    #[test]
    fn scene_information_lists_scene_fields() {
        let text = scene_information(&scene()).unwrap();
        assert_eq!(
            text,
            "SCENE INFORMATION:\n\
             - Scene Number: 2 (1-4)\n\
             - Book Title: \"Where is Milo?\"\n\
             - World: Underwater Kingdom (Enchanted Forest / Outer Space / Underwater Kingdom)\n\
             - Character to Find: Milo, a person\n\
             - Character Style: 3d\n\
             - Character Special Ability: invisibility\n\
             - Target Age Group: 7-10"
        );
    }

    #[test]
    fn scene_information_adds_difficulty_and_scene_title_when_given() {
        let info = SceneInformation {
            special_ability: None,
            difficulty: Some("hard"),
            scene_title: Some("The Coral Market"),
            ..scene()
        };
        let text = scene_information(&info).unwrap();
        assert!(!text.contains("Special Ability"));
        assert!(text.ends_with(
            "- Target Age Group: 7-10\n- Difficulty: hard\n- Scene Title: \"The Coral Market\""
        ));
    }

    #[test]
    fn values_are_not_html_escaped() {
        let text = book_information(&BookInformation { title: "Tom & <Jerry>", ..info() })
            .unwrap();
        assert!(text.contains("\"Tom & <Jerry>\""));
    }

    #[test]
    fn reference_image_names_the_character() {
        let text = reference_image("Ruby").unwrap();
        assert!(text.starts_with("CHARACTER REFERENCE IMAGE:\n- A reference image of Ruby is provided"));
    }
}
