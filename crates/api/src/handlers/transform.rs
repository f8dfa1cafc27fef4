//! Handler for the fitness-progress image transformation.
//!
//! Accepts a multipart upload (`image` file, optional `period` text),
//! forwards it to the configured [`ImageGenerator`] with the period's
//! prompt, and returns both images as data URIs.
//!
//! [`ImageGenerator`]: fitvision_gemini::ImageGenerator

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use fitvision_core::error::CoreError;
use fitvision_core::media::{is_image_mime, InlineImage};
use fitvision_core::period::Period;
use fitvision_core::transform::{select_generated_image, TransformationResult};
use fitvision_gemini::EditRequest;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::Success;
use crate::state::AppState;

/// Multipart field carrying the photo.
pub const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the period identifier.
pub const PERIOD_FIELD: &str = "period";

/// Generic content type browsers and curl send when they don't know better.
const OCTET_STREAM: &str = "application/octet-stream";

/// Payload of a successful transformation.
#[derive(Debug, Serialize)]
pub struct TransformResponse {
    /// The uploaded photo as a data URI.
    pub before: String,
    /// The generated photo as a data URI.
    pub after: String,
    /// Period the prompt was selected for.
    pub period: Period,
}

impl From<TransformationResult> for TransformResponse {
    fn from(result: TransformationResult) -> Self {
        Self {
            before: result.before.to_data_uri(),
            after: result.after.to_data_uri(),
            period: result.period,
        }
    }
}

/// Raw form contents before validation.
#[derive(Debug, Default)]
struct TransformForm {
    image: Option<InlineImage>,
    period: Option<String>,
}

/// Drain the multipart stream. The first non-empty `image` field is kept;
/// unknown fields are ignored.
async fn read_form(mut multipart: Multipart) -> AppResult<TransformForm> {
    let mut form = TransformForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(IMAGE_FIELD) if form.image.is_none() => {
                let declared = field
                    .content_type()
                    .filter(|ct| !ct.eq_ignore_ascii_case(OCTET_STREAM))
                    .map(str::to_string);

                if let Some(ref mime) = declared {
                    if !is_image_mime(mime) {
                        return Err(CoreError::Validation(format!(
                            "Uploaded file must be an image (got {mime})"
                        ))
                        .into());
                    }
                }

                let data = field.bytes().await?;
                if !data.is_empty() {
                    form.image =
                        Some(InlineImage::from_upload(declared.as_deref(), data.to_vec()));
                }
            }
            Some(PERIOD_FIELD) => {
                form.period = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/v1/generate
///
/// Fails with a configuration error when no generator is configured, a
/// validation error when the image is missing, and a generation error when
/// the model returns no image (carrying the model's own explanation when it
/// gave one).
pub async fn generate(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<Success<TransformResponse>>> {
    let generator = state.generator.as_ref().ok_or_else(|| {
        CoreError::Configuration("GEMINI_API_KEY is not set".to_string())
    })?;

    let multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let form = read_form(multipart).await?;

    let before = form.image.ok_or_else(|| {
        CoreError::Validation(format!(
            "No image was uploaded (expected a '{IMAGE_FIELD}' file field)"
        ))
    })?;

    let (period, prompt) = state.prompts.resolve(form.period.as_deref());

    tracing::info!(
        %period,
        mime_type = %before.mime_type,
        size_bytes = before.len(),
        generator = generator.name(),
        "Requesting image transformation"
    );

    let request = EditRequest {
        prompt: prompt.to_string(),
        image: before,
    };
    let parts = generator.generate(&request).await?;
    let after = select_generated_image(parts)?;

    tracing::info!(
        %period,
        mime_type = %after.mime_type,
        size_bytes = after.len(),
        "Image transformation complete"
    );

    let result = TransformationResult {
        before: request.image,
        after,
        period,
    };

    Ok(Json(Success::new(result.into())))
}
