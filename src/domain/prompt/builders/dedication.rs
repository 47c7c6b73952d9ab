use crate::domain::prompt::assembler::{DefaultTracker, assemble};
use crate::domain::prompt::error::PromptAssemblyError;
use crate::domain::prompt::keys::{Dimension, StoryWorld};
use crate::domain::prompt::options::DedicationOptions;
use crate::domain::prompt::templates::TemplateDocument;
use crate::domain::prompt::types::{AssembledPrompt, PromptMode, Section};

/// Dedication page illustration. The template text is returned verbatim.
pub fn build_dedication_scene_prompt(
    document: &TemplateDocument,
    options: &DedicationOptions,
) -> Result<AssembledPrompt, PromptAssemblyError> {
    let templates = document.dedication_scene()?;

    let mut defaults = DefaultTracker::new();
    let world = defaults.track(
        Dimension::StoryWorld,
        &options.story_world,
        StoryWorld::parse(&options.story_world),
        StoryWorld::short_key,
    );

    assemble(PromptMode::Dedication, &[Section::Dedication], defaults, |_| {
        Ok(templates
            .get(world.short_key())
            .or_else(|| templates.get(StoryWorld::EnchantedForest.short_key()))
            .map(str::to_string))
    })
}
