use std::fmt;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    EmailReply,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Implement the Into trait so that Prompt can be converted to an &str
impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

// The original email stays the suffix of the prompt so the model sees
// the instructions before the content it is replying to.
const EMAIL_REPLY_PROMPT: &str = "Generate a professional email reply for the following email.{{#if tone}} Use a {{tone}} tone.{{/if}}\n\nOriginal email:\n{{email_content}}";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML, so values must render verbatim
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::EmailReply.to_string(), EMAIL_REPLY_PROMPT)
        .expect("Failed to register template");
    registry
}

/// Render the reply prompt. A missing, empty, or whitespace-only tone
/// omits the tone clause entirely.
pub fn build_reply_prompt(email_content: &str, tone: Option<&str>) -> Result<String> {
    let tone = tone.map(str::trim).filter(|t| !t.is_empty());
    let rendered = templates().render(
        &Prompt::EmailReply.to_string(),
        &json!({
            "tone": tone,
            "email_content": email_content,
        }),
    )?;
    Ok(rendered)
}
