//! Shared response envelope for API handlers.
//!
//! Successful responses are flat JSON objects tagged with
//! `"success": true`; failures carry `"success": false` (see
//! [`crate::error::AppError`]). Use [`Success`] instead of ad-hoc
//! `serde_json::json!` so payloads stay typed.

use serde::Serialize;

/// `{ "success": true, ...T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Success::new(TransformResponse { .. })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
