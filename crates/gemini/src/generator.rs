//! The image-generation seam used by the HTTP layer.
//!
//! Handlers depend on [`ImageGenerator`] rather than on Gemini directly so
//! tests can substitute a canned implementation.

use std::time::Instant;

use async_trait::async_trait;
use fitvision_core::error::CoreError;
use fitvision_core::media::InlineImage;
use fitvision_core::transform::ContentPart;

use crate::api::{GeminiApi, GeminiApiError};
use crate::messages::GenerateContentRequest;

/// A single image-edit instruction.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// Guidance text for the model.
    pub prompt: String,
    /// Image to be edited.
    pub image: InlineImage,
}

/// Anything that can turn an [`EditRequest`] into response parts.
///
/// Implementations perform exactly one attempt; callers decide what to do
/// with failures.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Run the edit and return the model's parts in order.
    async fn generate(&self, request: &EditRequest) -> Result<Vec<ContentPart>, CoreError>;

    /// Short name for logs and health output.
    fn name(&self) -> &str;
}

impl From<GeminiApiError> for CoreError {
    fn from(err: GeminiApiError) -> Self {
        CoreError::Generation(err.to_string())
    }
}

/// [`ImageGenerator`] backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    api: GeminiApi,
}

impl GeminiGenerator {
    pub fn new(api: GeminiApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ImageGenerator for GeminiGenerator {
    async fn generate(&self, request: &EditRequest) -> Result<Vec<ContentPart>, CoreError> {
        let start = Instant::now();
        let body = GenerateContentRequest::image_edit(&request.prompt, &request.image);

        let response = self.api.generate_content(&body).await.map_err(|e| {
            tracing::error!(model = self.api.model(), error = %e, "Gemini request failed");
            e
        })?;

        tracing::debug!(
            model = self.api.model(),
            finish_reason = response.finish_reason().unwrap_or("<none>"),
            duration_ms = start.elapsed().as_millis() as u64,
            "Gemini response received"
        );

        Ok(response.into_parts()?)
    }

    fn name(&self) -> &str {
        self.api.model()
    }
}
