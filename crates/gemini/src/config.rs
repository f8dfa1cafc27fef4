/// Default image-capable Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp-image-generation";

/// Public Generative Language API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini client configuration loaded from environment variables.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; `None` leaves the service running but unable to generate.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                                      |
    /// |-------------------|----------------------------------------------|
    /// | `GEMINI_API_KEY`  | unset                                        |
    /// | `GEMINI_MODEL`    | `gemini-2.0-flash-exp-image-generation`      |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  |
    ///
    /// An empty `GEMINI_API_KEY` counts as unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let base_url = std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
