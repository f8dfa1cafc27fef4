/// Domain-level errors shared by every crate in the workspace.
///
/// The HTTP layer maps each variant onto a status code and error code;
/// see `fitvision_api::error::AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller supplied missing or malformed input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The server is missing required configuration (e.g. an API key).
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// The generation capability failed or refused to produce an image.
    ///
    /// The message is shown to the end user verbatim.
    #[error("{0}")]
    Generation(String),
}
