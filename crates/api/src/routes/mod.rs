pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate                                        transform an uploaded photo (POST, multipart)
/// /periods                                         supported progress periods (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(handlers::transform::generate))
        .route("/periods", get(handlers::periods::list_periods))
}
