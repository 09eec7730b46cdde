//! Generative-text configuration loaded from environment variables.
//!
//! All settings have defaults so the dashboard works without the
//! content-assist feature configured; only the API key is mandatory for
//! actually calling the service.

/// Generative-text service configuration.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key for the generative-text service.
    /// Env: `GENAI_API_KEY`
    /// Default: unset (generation requests fail with a dismissable notice).
    pub api_key: Option<String>,

    /// Base URL of the service.
    /// Env: `GENAI_ENDPOINT`
    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    pub endpoint: String,

    /// Model name.
    /// Env: `GENAI_MODEL`
    /// Default: `gemini-2.5-flash`
    pub model: String,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl GenAiConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GENAI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        if let Ok(endpoint) = std::env::var("GENAI_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = endpoint.trim_end_matches('/').to_string();
            } else {
                tracing::warn!("Empty GENAI_ENDPOINT, using default");
            }
        }

        if let Ok(model) = std::env::var("GENAI_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }

        config
    }
}
