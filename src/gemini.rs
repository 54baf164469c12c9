//! Client for the Gemini `generateContent` API

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

// {"contents":[{"parts":[{"text":"<prompt>"}]}]}
//
// Built with serde so embedded quotes and control characters in the
// prompt are always escaped correctly.
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn new(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

// Every field along the extraction path is optional so a response
// with a different shape becomes an error instead of a panic.
#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ReplyPart>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

// Navigate candidates[0].content.parts[0].text
fn extract_reply(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|mut parts| {
            if parts.is_empty() {
                None
            } else {
                Some(parts.remove(0))
            }
        })
        .and_then(|part| part.text)
        .ok_or_else(|| anyhow!("Response missing candidates[0].content.parts[0].text"))
}

/// Send a single prompt to the generative language API and return the
/// generated text. Exactly one outbound call, no retries. A non-2xx
/// status is an error distinct from a malformed response body.
pub async fn generate_content(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String> {
    let payload = GenerateContentRequest::new(prompt);
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches("/"),
        model
    );
    let response = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;
    let body: GenerateContentResponse = response.json().await?;
    extract_reply(body)
}
