//! Selecting the transformed image out of a generation response.

use crate::error::CoreError;
use crate::media::InlineImage;
use crate::period::Period;

/// Error shown when the model returns neither an image nor an explanation.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate an image. Please try a different photo.";

/// One part of the generation capability's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Image(InlineImage),
    Text(String),
}

/// A completed transformation, ready to be rendered as a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationResult {
    pub before: InlineImage,
    pub after: InlineImage,
    pub period: Period,
}

/// Pick the generated image from the response parts.
///
/// The first image part wins. Without one, the first non-empty text part
/// is returned as a [`CoreError::Generation`] (this is how the model
/// explains refusals); with neither, [`GENERIC_FAILURE_MESSAGE`] is used.
pub fn select_generated_image(parts: Vec<ContentPart>) -> Result<InlineImage, CoreError> {
    let mut first_text: Option<String> = None;

    for part in parts {
        match part {
            ContentPart::Image(image) => return Ok(image),
            ContentPart::Text(text) if first_text.is_none() && !text.is_empty() => {
                first_text = Some(text);
            }
            ContentPart::Text(_) => {}
        }
    }

    Err(CoreError::Generation(
        first_text.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
    ))
}
