use anyhow::Result;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::gemini::generate_content;
use crate::prompt::build_reply_prompt;

/// Input for a single reply generation. Field names match the JSON
/// wire format used by callers.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub email_content: String,
    #[serde(default)]
    pub tone: Option<String>,
}

/// Generates email replies by prompting the generative language API.
/// Holds a shared HTTP client constructed once by the caller; each
/// call is an independent request with no state in between.
pub struct ReplyGenerator {
    client: reqwest::Client,
    config: AppConfig,
}

impl ReplyGenerator {
    pub fn new(client: reqwest::Client, config: AppConfig) -> Self {
        Self { client, config }
    }

    /// Build the prompt, make one call to the API, and return the
    /// extracted reply. Every failure propagates to the caller.
    pub async fn generate(&self, request: &EmailRequest) -> Result<String> {
        let prompt = build_reply_prompt(&request.email_content, request.tone.as_deref())?;
        generate_content(
            &self.client,
            &self.config.gemini_api_url,
            &self.config.gemini_api_key,
            &self.config.model,
            &prompt,
        )
        .await
    }
}
