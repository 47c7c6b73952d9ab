//! Canonical keys for every template dimension.
//!
//! Callers pass loosely formatted strings (`"magical_creature"`, `"outer-space"`,
//! `"treasurehunt"`). Each dimension has a single parser that returns a
//! [`Resolved`] value, so a silent default is distinguishable from a match.

use std::fmt;

/// Outcome of mapping free-form input onto a canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<T> {
    /// The input matched one of the dimension's aliases.
    Recognized(T),
    /// The input matched nothing; the dimension default was used.
    Defaulted(T),
}

impl<T: Copy> Resolved<T> {
    pub fn value(&self) -> T {
        match self {
            Resolved::Recognized(value) | Resolved::Defaulted(value) => *value,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Resolved::Recognized(_))
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolved::Defaulted(_))
    }
}

/// Lowercase and strip separators so `Outer-Space`, `outer_space` and
/// `outerspace` compare equal.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Dimension names, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    CharacterType,
    CharacterStyle,
    EnhancementLevel,
    SpecialAbility,
    StoryWorld,
    AdventureType,
    Difficulty,
    Occasion,
    AgeGroup,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::CharacterType => "character type",
            Dimension::CharacterStyle => "character style",
            Dimension::EnhancementLevel => "enhancement level",
            Dimension::SpecialAbility => "special ability",
            Dimension::StoryWorld => "story world",
            Dimension::AdventureType => "adventure type",
            Dimension::Difficulty => "difficulty",
            Dimension::Occasion => "occasion",
            Dimension::AgeGroup => "age group",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterType {
    #[default]
    Person,
    Animal,
    Magical,
}

impl CharacterType {
    pub fn parse(input: &str) -> Resolved<Self> {
        match normalize(input).as_str() {
            "person" => Resolved::Recognized(Self::Person),
            "animal" => Resolved::Recognized(Self::Animal),
            "magical" | "magicalcreature" => Resolved::Recognized(Self::Magical),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Animal => "animal",
            Self::Magical => "magical",
        }
    }

    /// Article-prefixed phrase used in free-text prompts.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Person => "a person",
            Self::Animal => "an animal",
            Self::Magical => "a magical creature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterStyle {
    ThreeD,
    #[default]
    Cartoon,
    Anime,
}

impl CharacterStyle {
    pub const ALL: [CharacterStyle; 3] = [Self::ThreeD, Self::Cartoon, Self::Anime];

    pub fn parse(input: &str) -> Resolved<Self> {
        match normalize(input).as_str() {
            "3d" => Resolved::Recognized(Self::ThreeD),
            "cartoon" => Resolved::Recognized(Self::Cartoon),
            "anime" => Resolved::Recognized(Self::Anime),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ThreeD => "3d",
            Self::Cartoon => "cartoon",
            Self::Anime => "anime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnhancementLevel {
    Minimal,
    #[default]
    Normal,
    High,
}

impl EnhancementLevel {
    pub fn parse(input: &str) -> Resolved<Self> {
        match normalize(input).as_str() {
            "minimal" => Resolved::Recognized(Self::Minimal),
            "normal" => Resolved::Recognized(Self::Normal),
            "high" => Resolved::Recognized(Self::High),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    /// Whether the level carries the additional-enhancement specs.
    pub fn has_additional_specs(&self) -> bool {
        matches!(self, Self::Normal | Self::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialAbility {
    HealingPower,
    Flying,
    SuperStrength,
    Invisibility,
    AnimalCommunication,
    TimeControl,
    ShapeShifting,
    MagicCasting,
    #[default]
    Custom,
}

impl SpecialAbility {
    pub fn parse(input: &str) -> Resolved<Self> {
        match normalize(input).as_str() {
            "healingpowers" | "healingpower" => Resolved::Recognized(Self::HealingPower),
            "flying" => Resolved::Recognized(Self::Flying),
            "superstrength" => Resolved::Recognized(Self::SuperStrength),
            "invisibility" => Resolved::Recognized(Self::Invisibility),
            "animalcommunication" => Resolved::Recognized(Self::AnimalCommunication),
            "timecontrol" => Resolved::Recognized(Self::TimeControl),
            "shapeshifting" => Resolved::Recognized(Self::ShapeShifting),
            "magiccasting" => Resolved::Recognized(Self::MagicCasting),
            "custom" => Resolved::Recognized(Self::Custom),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::HealingPower => "healingPower",
            Self::Flying => "flying",
            Self::SuperStrength => "superStrength",
            Self::Invisibility => "invisibility",
            Self::AnimalCommunication => "animalCommunication",
            Self::TimeControl => "timeControl",
            Self::ShapeShifting => "shapeShifting",
            Self::MagicCasting => "magicCasting",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryWorld {
    #[default]
    EnchantedForest,
    OuterSpace,
    UnderwaterKingdom,
}

impl StoryWorld {
    pub fn parse(input: &str) -> Resolved<Self> {
        match normalize(input).as_str() {
            "forest" | "enchantedforest" => Resolved::Recognized(Self::EnchantedForest),
            "space" | "outerspace" => Resolved::Recognized(Self::OuterSpace),
            "underwater" | "underwaterkingdom" => Resolved::Recognized(Self::UnderwaterKingdom),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    /// Key used by the cover, search, story-text and story-scene sub-trees.
    pub fn key(&self) -> &'static str {
        match self {
            Self::EnchantedForest => "enchantedForest",
            Self::OuterSpace => "outerSpace",
            Self::UnderwaterKingdom => "underwaterKingdom",
        }
    }

    /// Key used by the environment, adventure-scene and dedication sub-trees.
    pub fn short_key(&self) -> &'static str {
        match self {
            Self::EnchantedForest => "forest",
            Self::OuterSpace => "outerspace",
            Self::UnderwaterKingdom => "underwater",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EnchantedForest => "Enchanted Forest",
            Self::OuterSpace => "Outer Space",
            Self::UnderwaterKingdom => "Underwater Kingdom",
        }
    }

    /// Text for `{story_world}`: the display name when recognized, the
    /// caller's own text otherwise.
    pub fn display_for(input: &str) -> &str {
        match Self::parse(input) {
            Resolved::Recognized(world) => world.display_name(),
            Resolved::Defaulted(_) => input.trim(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdventureType {
    #[default]
    TreasureHunt,
    HelpingFriend,
}

impl AdventureType {
    /// Substring match: anything mentioning a treasure or a hunt is a treasure
    /// hunt, anything mentioning help or a friend is a helping-friend story.
    pub fn parse(input: &str) -> Resolved<Self> {
        let normalized = normalize(input);
        if normalized.contains("treasure") || normalized.contains("hunt") {
            Resolved::Recognized(Self::TreasureHunt)
        } else if normalized.contains("help") || normalized.contains("friend") {
            Resolved::Recognized(Self::HelpingFriend)
        } else {
            Resolved::Defaulted(Self::default())
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::TreasureHunt => "treasureHunt",
            Self::HelpingFriend => "helpingFriend",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TreasureHunt => "Treasure Hunt",
            Self::HelpingFriend => "Helping a Friend",
        }
    }

    pub fn display_for(input: &str) -> &str {
        match Self::parse(input) {
            Resolved::Recognized(adventure) => adventure.display_name(),
            Resolved::Defaulted(_) => input.trim(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Accepts difficulty names and the age group each one targets.
    pub fn parse(input: &str) -> Resolved<Self> {
        match input.trim().to_lowercase().as_str() {
            "easy" | "3-6" => Resolved::Recognized(Self::Easy),
            "medium" | "7-10" => Resolved::Recognized(Self::Medium),
            "hard" | "11-12" => Resolved::Recognized(Self::Hard),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occasion {
    Birthday,
    Graduation,
    FirstDayOfSchool,
    NewSibling,
    /// No occasion-specific template.
    #[default]
    General,
}

impl Occasion {
    pub fn parse(input: &str) -> Resolved<Self> {
        match normalize(input).as_str() {
            "birthday" => Resolved::Recognized(Self::Birthday),
            "graduation" => Resolved::Recognized(Self::Graduation),
            "firstdayschool" | "firstdayofschool" => Resolved::Recognized(Self::FirstDayOfSchool),
            "newsibling" => Resolved::Recognized(Self::NewSibling),
            "general" | "" => Resolved::Recognized(Self::General),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    /// Template key; empty for general occasions.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Graduation => "graduation",
            Self::FirstDayOfSchool => "firstDayOfSchool",
            Self::NewSibling => "newSibling",
            Self::General => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeGroup {
    ThreeToSix,
    #[default]
    SevenToTen,
    ElevenToTwelve,
}

impl AgeGroup {
    pub fn parse(input: &str) -> Resolved<Self> {
        match input.trim() {
            "3-6" => Resolved::Recognized(Self::ThreeToSix),
            "7-10" => Resolved::Recognized(Self::SevenToTen),
            "11-12" => Resolved::Recognized(Self::ElevenToTwelve),
            _ => Resolved::Defaulted(Self::default()),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ThreeToSix => "3-6",
            Self::SevenToTen => "7-10",
            Self::ElevenToTwelve => "11-12",
        }
    }

    pub fn reading_level(&self) -> &'static str {
        match self {
            Self::ThreeToSix => "early_reader",
            Self::SevenToTen => "developing_reader",
            Self::ElevenToTwelve => "independent_reader",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_type_accepts_magical_creature() {
        assert_eq!(
            CharacterType::parse("magical_creature"),
            Resolved::Recognized(CharacterType::Magical)
        );
        assert_eq!(CharacterType::parse("Animal"), Resolved::Recognized(CharacterType::Animal));
        assert_eq!(CharacterType::parse("robot"), Resolved::Defaulted(CharacterType::Person));
    }

    #[test]
    fn world_accepts_separator_variants() {
        for input in ["outer-space", "outer_space", "OuterSpace", "outer space", "space"] {
            assert_eq!(StoryWorld::parse(input), Resolved::Recognized(StoryWorld::OuterSpace));
        }
        assert_eq!(
            StoryWorld::parse("underwater-kingdom").value().short_key(),
            "underwater"
        );
    }

    #[test]
    fn unknown_world_defaults_to_enchanted_forest() {
        let resolved = StoryWorld::parse("unknown-value");
        assert!(resolved.is_defaulted());
        assert_eq!(resolved.value(), StoryWorld::EnchantedForest);
        assert_eq!(resolved.value().key(), "enchantedForest");
    }

    #[test]
    fn unrecognized_display_keeps_caller_text() {
        assert_eq!(StoryWorld::display_for("space"), "Outer Space");
        assert_eq!(StoryWorld::display_for(" Candy Land "), "Candy Land");
        assert_eq!(AdventureType::display_for("treasure"), "Treasure Hunt");
        assert_eq!(AdventureType::display_for("space race"), "space race");
    }

    #[test]
    fn adventure_matches_by_substring() {
        assert_eq!(AdventureType::parse("treasurehunt").value().key(), "treasureHunt");
        assert_eq!(AdventureType::parse("Helping a Friend").value().key(), "helpingFriend");
        assert_eq!(AdventureType::parse("helpfriend").value(), AdventureType::HelpingFriend);
        assert!(AdventureType::parse("space race").is_defaulted());
    }

    #[test]
    fn difficulty_accepts_age_groups() {
        assert_eq!(Difficulty::parse("3-6"), Resolved::Recognized(Difficulty::Easy));
        assert_eq!(Difficulty::parse("HARD"), Resolved::Recognized(Difficulty::Hard));
        assert_eq!(Difficulty::parse("extreme"), Resolved::Defaulted(Difficulty::Medium));
    }

    #[test]
    fn occasion_separates_general_from_unknown() {
        assert_eq!(Occasion::parse("first_day_school").value().key(), "firstDayOfSchool");
        assert_eq!(Occasion::parse("new-sibling").value(), Occasion::NewSibling);
        assert_eq!(Occasion::parse("general"), Resolved::Recognized(Occasion::General));
        assert_eq!(Occasion::parse("holiday"), Resolved::Defaulted(Occasion::General));
        assert_eq!(Occasion::General.key(), "");
    }

    #[test]
    fn special_ability_maps_form_values() {
        assert_eq!(SpecialAbility::parse("healing-powers").value().key(), "healingPower");
        assert_eq!(SpecialAbility::parse("time-control").value().key(), "timeControl");
        assert_eq!(
            SpecialAbility::parse("breathes fire"),
            Resolved::Defaulted(SpecialAbility::Custom)
        );
    }

    #[test]
    fn age_group_drives_reading_level() {
        assert_eq!(AgeGroup::parse("3-6").value().reading_level(), "early_reader");
        assert_eq!(AgeGroup::parse("teen"), Resolved::Defaulted(AgeGroup::SevenToTen));
    }
}
