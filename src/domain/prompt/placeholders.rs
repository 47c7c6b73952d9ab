//! `{token}` substitution for template fragments.

use std::collections::BTreeMap;

/// Placeholder tokens recognized inside template fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    CharacterName,
    CharacterType,
    CharacterStyle,
    SpecialAbility,
    AgeGroup,
    StoryWorld,
    AdventureType,
    AdventureObjective,
    StoryTitle,
    PageNumber,
    StoryPageText,
    CharacterDescription,
    CharacterReferenceImage,
    UploadedChildDrawing,
    ReadingLevel,
}

impl Placeholder {
    pub const ALL: [Placeholder; 15] = [
        Self::CharacterName,
        Self::CharacterType,
        Self::CharacterStyle,
        Self::SpecialAbility,
        Self::AgeGroup,
        Self::StoryWorld,
        Self::AdventureType,
        Self::AdventureObjective,
        Self::StoryTitle,
        Self::PageNumber,
        Self::StoryPageText,
        Self::CharacterDescription,
        Self::CharacterReferenceImage,
        Self::UploadedChildDrawing,
        Self::ReadingLevel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CharacterName => "character_name",
            Self::CharacterType => "character_type",
            Self::CharacterStyle => "character_style",
            Self::SpecialAbility => "special_ability",
            Self::AgeGroup => "age_group",
            Self::StoryWorld => "story_world",
            Self::AdventureType => "adventure_type",
            Self::AdventureObjective => "adventure_objective",
            Self::StoryTitle => "story_title",
            Self::PageNumber => "page_number",
            Self::StoryPageText => "story_page_text",
            Self::CharacterDescription => "character_description",
            Self::CharacterReferenceImage => "character_reference_image",
            Self::UploadedChildDrawing => "uploaded_child_drawing",
            Self::ReadingLevel => "reading_level",
        }
    }

    /// The literal `{name}` form as it appears in templates.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name())
    }

    /// Literal substituted when the caller supplied no value.
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::CharacterName => "Character",
            Self::CharacterType => "character",
            Self::CharacterStyle => "cartoon",
            Self::SpecialAbility => "special abilities",
            Self::AgeGroup => "7-10",
            Self::StoryWorld => "Enchanted Forest",
            Self::AdventureType => "Treasure Hunt",
            Self::AdventureObjective => "treasure hunt",
            Self::StoryTitle => "Adventure Story",
            Self::PageNumber => "1",
            Self::StoryPageText => "[STORY PAGE TEXT]",
            Self::CharacterDescription => "special abilities",
            Self::CharacterReferenceImage | Self::UploadedChildDrawing => "[REFERENCE IMAGE]",
            Self::ReadingLevel => "developing_reader",
        }
    }
}

/// Values for one substitution pass.
///
/// Blank values count as missing so a template never receives an empty
/// insertion where a fallback literal exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderValues {
    values: BTreeMap<Placeholder, String>,
}

impl PlaceholderValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.set(placeholder, value);
        self
    }

    pub fn with_opt(mut self, placeholder: Placeholder, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.set(placeholder, value);
        }
        self
    }

    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&placeholder);
        } else {
            self.values.insert(placeholder, value);
        }
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Value for the token, or its fallback literal.
    pub fn resolve(&self, placeholder: Placeholder) -> &str {
        self.get(placeholder).unwrap_or_else(|| placeholder.fallback())
    }

    /// Replace every occurrence of every recognized token in `template`.
    ///
    /// Values are inserted verbatim; a substituted value is never rescanned for
    /// tokens belonging to a later placeholder.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let candidate = &rest[open..];
            match Placeholder::ALL.iter().find(|p| starts_with_token(candidate, p.name())) {
                Some(placeholder) => {
                    out.push_str(self.resolve(*placeholder));
                    rest = &candidate[placeholder.name().len() + 2..];
                }
                None => {
                    out.push('{');
                    rest = &candidate[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn starts_with_token(text: &str, name: &str) -> bool {
    text.strip_prefix('{')
        .and_then(|after| after.strip_prefix(name))
        .is_some_and(|after| after.starts_with('}'))
}

/// Recognized tokens still present in `text`, in first-seen order.
pub fn unresolved_tokens(text: &str) -> Vec<Placeholder> {
    let mut found: Vec<(usize, Placeholder)> = Placeholder::ALL
        .iter()
        .filter_map(|p| text.find(&p.token()).map(|pos| (pos, *p)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, p)| p).collect()
}
