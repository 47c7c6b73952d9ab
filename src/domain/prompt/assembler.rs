use tracing::{debug, warn};

use super::error::PromptAssemblyError;
use super::keys::{Dimension, Resolved};
use super::placeholders::unresolved_tokens;
use super::types::{AssembledPrompt, DefaultedInput, PromptMode, Section};

/// Separator placed between consecutive sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Records dimension inputs that fell back to their default key.
#[derive(Debug, Default)]
pub(crate) struct DefaultTracker {
    defaulted: Vec<DefaultedInput>,
}

impl DefaultTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Unwrap a resolved key, remembering it when it was defaulted.
    pub(crate) fn track<T: Copy>(
        &mut self,
        dimension: Dimension,
        input: &str,
        resolved: Resolved<T>,
        key: impl Fn(&T) -> &'static str,
    ) -> T {
        let value = resolved.value();
        if resolved.is_defaulted() {
            self.record(dimension, input, key(&value));
        }
        value
    }

    pub(crate) fn record(&mut self, dimension: Dimension, input: &str, used: &'static str) {
        self.defaulted.push(DefaultedInput { dimension, input: input.to_string(), used });
    }

    pub(crate) fn into_inner(self) -> Vec<DefaultedInput> {
        self.defaulted
    }
}

/// Walk `order`, rendering each section and keeping the non-blank ones.
///
/// `render` returns `Ok(None)` for a section with nothing to contribute.
pub(crate) fn assemble<F>(
    mode: PromptMode,
    order: &[Section],
    defaults: DefaultTracker,
    render: F,
) -> Result<AssembledPrompt, PromptAssemblyError>
where
    F: FnMut(Section) -> Result<Option<String>, PromptAssemblyError>,
{
    assemble_joined(mode, order, SECTION_SEPARATOR, defaults, render)
}

/// [`assemble`] with a caller-chosen separator between sections.
pub(crate) fn assemble_joined<F>(
    mode: PromptMode,
    order: &[Section],
    separator: &str,
    defaults: DefaultTracker,
    mut render: F,
) -> Result<AssembledPrompt, PromptAssemblyError>
where
    F: FnMut(Section) -> Result<Option<String>, PromptAssemblyError>,
{
    let mut parts = Vec::with_capacity(order.len());
    let mut included = Vec::new();
    let mut skipped = Vec::new();

    for &section in order {
        match render(section)? {
            Some(text) if !text.trim().is_empty() => {
                parts.push(text);
                included.push(section);
            }
            _ => {
                debug!(%mode, %section, "section skipped");
                skipped.push(section);
            }
        }
    }

    let defaulted = defaults.into_inner();
    for entry in &defaulted {
        warn!(
            %mode,
            dimension = %entry.dimension,
            input = %entry.input,
            used = entry.used,
            "unrecognized input, using default key"
        );
    }

    let content = parts.join(separator);
    let leftover = unresolved_tokens(&content);
    if !leftover.is_empty() && mode != PromptMode::Dedication {
        warn!(%mode, ?leftover, "assembled prompt still contains placeholder tokens");
    }

    Ok(AssembledPrompt { mode, content, included, skipped, defaulted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::keys::StoryWorld;

    #[test]
    fn keeps_order_and_drops_blank_sections() {
        let order = [Section::BasePrompt, Section::AgeRequirement, Section::OutputFormat];
        let prompt = assemble(PromptMode::StoryText, &order, DefaultTracker::new(), |section| {
            Ok(match section {
                Section::BasePrompt => Some("base".to_string()),
                Section::AgeRequirement => Some("  ".to_string()),
                _ => Some("format".to_string()),
            })
        })
        .unwrap();

        assert_eq!(prompt.content, "base\n\nformat");
        assert_eq!(prompt.included, vec![Section::BasePrompt, Section::OutputFormat]);
        assert_eq!(prompt.skipped, vec![Section::AgeRequirement]);
    }

    #[test]
    fn joined_assembly_uses_the_given_separator() {
        let order = [Section::CharacterIntro, Section::Description, Section::PreservationRules];
        let prompt = assemble_joined(
            PromptMode::CharacterAbility,
            &order,
            " ",
            DefaultTracker::new(),
            |section| {
                Ok(match section {
                    Section::Description => None,
                    Section::CharacterIntro => Some("intro.".to_string()),
                    _ => Some("rules.".to_string()),
                })
            },
        )
        .unwrap();

        assert_eq!(prompt.content, "intro. rules.");
        assert_eq!(prompt.skipped, vec![Section::Description]);
    }

    #[test]
    fn render_errors_abort_assembly() {
        let result = assemble(
            PromptMode::StoryText,
            &[Section::BasePrompt],
            DefaultTracker::new(),
            |_| Err(PromptAssemblyError::mode_not_found("generateStoryText")),
        );
        assert!(matches!(result, Err(PromptAssemblyError::ModeNotFound { .. })));
    }

    #[test]
    fn tracker_records_only_defaulted_inputs() {
        let mut tracker = DefaultTracker::new();
        let mars = StoryWorld::parse("mars");
        let world = tracker.track(Dimension::StoryWorld, "mars", mars, StoryWorld::key);
        let forest = StoryWorld::parse("forest");
        tracker.track(Dimension::StoryWorld, "forest", forest, StoryWorld::key);

        assert_eq!(world, StoryWorld::EnchantedForest);
        let defaulted = tracker.into_inner();
        assert_eq!(defaulted.len(), 1);
        assert_eq!(defaulted[0].input, "mars");
        assert_eq!(defaulted[0].used, "enchantedForest");
    }
}
