//! Wire types for the Gemini `generateContent` REST endpoint.
//!
//! Requests carry a single user turn made of a text part and an inline
//! image part. Responses are reduced to typed [`ContentPart`]s from the
//! first candidate.

use fitvision_core::media::InlineImage;
use fitvision_core::transform::ContentPart;
use serde::{Deserialize, Serialize};

use crate::api::GeminiApiError;

/// Modalities requested from the model: it may explain itself in text
/// and/or return the edited image.
pub const RESPONSE_MODALITIES: [&str; 2] = ["TEXT", "IMAGE"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<RequestPart>,
}

/// A request part: either guidance text or an inlined image.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Standard base64 payload.
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<&'static str>,
}

impl GenerateContentRequest {
    /// Build an image-edit request: prompt first, then the source image.
    pub fn image_edit(prompt: &str, image: &InlineImage) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    RequestPart::Text {
                        text: prompt.to_string(),
                    },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.to_base64(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: RESPONSE_MODALITIES.to_vec(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

impl GenerateContentResponse {
    /// Convert the first candidate's parts into typed content parts.
    ///
    /// A response without candidates or content yields no parts. Parts
    /// carrying neither text nor inline data are dropped. Inline images
    /// whose payload is not valid base64 are skipped; the response is only
    /// an error when every inline image failed to decode.
    pub fn into_parts(self) -> Result<Vec<ContentPart>, GeminiApiError> {
        let Some(content) = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
        else {
            return Ok(Vec::new());
        };

        let mut parts = Vec::with_capacity(content.parts.len());
        let mut decode_error = None;
        for part in content.parts {
            if let Some(inline) = part.inline_data {
                match InlineImage::from_base64(inline.mime_type, &inline.data) {
                    Ok(image) => parts.push(ContentPart::Image(image)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping undecodable inline image");
                        decode_error.get_or_insert_with(|| e.to_string());
                    }
                }
            } else if let Some(text) = part.text {
                parts.push(ContentPart::Text(text));
            }
        }

        let has_image = parts.iter().any(|p| matches!(p, ContentPart::Image(_)));
        match decode_error {
            Some(message) if !has_image => Err(GeminiApiError::Decode(message)),
            _ => Ok(parts),
        }
    }

    /// Finish reason of the first candidate, for logging.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}
