use std::sync::Arc;

use fitvision_core::prompts::PromptCatalog;
use fitvision_gemini::ImageGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Prompt catalog, rendered once at startup.
    pub prompts: Arc<PromptCatalog>,
    /// Image generator; `None` when no API key is configured, in which
    /// case generation requests fail with a configuration error.
    pub generator: Option<Arc<dyn ImageGenerator>>,
}

impl AppState {
    pub fn new(config: ServerConfig, generator: Option<Arc<dyn ImageGenerator>>) -> Self {
        Self {
            config: Arc::new(config),
            prompts: Arc::new(PromptCatalog::new()),
            generator,
        }
    }
}
