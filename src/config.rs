use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_url: String,
    pub gemini_api_key: String,
    pub model: String,
}

impl AppConfig {
    /// Read settings from the environment. `GEMINI_MODEL` is optional
    /// and falls back to the default model.
    pub fn from_env() -> Result<Self> {
        let gemini_api_url =
            env::var("GEMINI_API_URL").context("Missing env var GEMINI_API_URL")?;
        let gemini_api_key =
            env::var("GEMINI_API_KEY").context("Missing env var GEMINI_API_KEY")?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            gemini_api_url,
            gemini_api_key,
            model,
        })
    }
}
