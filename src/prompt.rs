// src/prompt.rs
use crate::errors::ValidationError;
use crate::models::{ClothingStyle, SelectionMode};
use crate::state::Selection;

pub const MODERN_ATTIRE_INSTRUCTION: &str =
    "The person from the uploaded photo must keep their original modern clothing unchanged.";

pub const ANCIENT_ATTIRE_INSTRUCTION: &str = "Replace the clothing of the person from the uploaded photo with authentic, period-appropriate Ancient Israelite / Biblical era attire (tunics, robes, mantles) that matches the time period.";

/// Builds the instruction sent alongside the photo.
pub fn build_prompt(selection: &Selection) -> Result<String, ValidationError> {
    match selection.mode {
        SelectionMode::Freeform => {
            let text = selection.freeform_text.trim();
            if text.is_empty() {
                return Err(ValidationError::EmptyPrompt);
            }
            Ok(text.to_string())
        }
        SelectionMode::Preset => {
            let name = selection
                .resolved_name()
                .ok_or(ValidationError::NoCharacter)?;
            Ok(preset_prompt(name, selection.clothing))
        }
    }
}

pub fn preset_prompt(name: &str, clothing: ClothingStyle) -> String {
    let attire = match clothing {
        ClothingStyle::Modern => MODERN_ATTIRE_INSTRUCTION,
        ClothingStyle::Ancient => ANCIENT_ATTIRE_INSTRUCTION,
    };

    format!(
        "Generate a realistic image of the person from the uploaded photo standing next to the biblical figure: {name}.\n\
         \n\
         1. **Scene & Setting**: The background must be a historically accurate representation of {name}'s biblical era and location (e.g., ancient Jerusalem, the desert, Galilee, a royal palace).\n\
         2. **Character Appearance**: {name} must be depicted with strict historical accuracy appropriate to their time and role in the Bible.\n\
         3. **User Appearance**: Identify the person in the provided image. {attire}\n\
         4. **Composition**: Blend the user and {name} naturally into the scene with consistent, realistic lighting, shadows and interaction.\n"
    )
}
