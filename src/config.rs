// Vision service configuration.
//
// The API key is read from the environment only and is never logged.

use std::env;

use fractic_server_error::ServerError;

use crate::errors::MissingApiKey;

/// Preferred environment variable for the vision API key.
pub const API_KEY_ENV: &str = "GIGPILOT_GEMINI_KEY";
/// Generic fallback, kept for setups that export a bare `API_KEY`.
pub const API_KEY_FALLBACK_ENV: &str = "API_KEY";
pub const MODEL_ENV: &str = "GIGPILOT_GEMINI_MODEL";
pub const API_BASE_ENV: &str = "GIGPILOT_GEMINI_API_BASE";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone)]
pub struct VisionConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl VisionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Checks in order:
    /// 1. GIGPILOT_GEMINI_KEY
    /// 2. API_KEY
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ServerError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV)
            .or_else(|| non_empty(API_KEY_FALLBACK_ENV))
            .ok_or_else(|| MissingApiKey::new(API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        if let Some(model) = non_empty(MODEL_ENV) {
            config.model = model;
        }
        if let Some(api_base) = non_empty(API_BASE_ENV) {
            config.api_base = api_base.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

impl std::fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}
