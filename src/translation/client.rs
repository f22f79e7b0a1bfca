use anyhow::{Context, Result, anyhow, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::language::{Language, LanguagePair};
use super::prompt::build_prompt;
use crate::config::Credentials;
use crate::ui::Style;

/// Model identifier sent with every request.
pub const MODEL: &str = "gemini-2-flash-preview";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.3;

/// Output token cap sent with every request.
pub const MAX_TOKENS: u32 = 4096;

/// One piece of text to translate.
#[derive(Debug, Clone, Copy)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    /// Source language code (`en`, `zh`, `zh-cn`).
    pub source_language: &'a str,
    /// Target language code (`en`, `zh`, `zh-cn`).
    pub target_language: &'a str,
}

impl<'a> TranslationRequest<'a> {
    pub const fn for_pair(text: &'a str, pair: LanguagePair) -> Self {
        Self {
            text,
            source_language: pair.source.code(),
            target_language: pair.target.code(),
        }
    }

    pub fn prompt(&self) -> String {
        build_prompt(
            self.text,
            Language::source_name(self.source_language),
            Language::target_name(self.target_language),
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Either `{"choices": [{"message": {"content": ...}}]}` or `{"content": ...}`.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking-style client for the chat completion endpoint.
///
/// Each call is a single request with no retries.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl TranslationClient {
    pub fn new(credentials: &Credentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: credentials.endpoint.clone(),
            api_key: credentials.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Translates one text, logging any failure before returning it.
    pub async fn translate(&self, request: &TranslationRequest<'_>) -> Result<String> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            crate::warn!(
                "{} Error calling translation API: {e:#}",
                Style::error("✗")
            );
        }
        result
    }

    async fn send(&self, request: &TranslationRequest<'_>) -> Result<String> {
        let chat_request = ChatCompletionRequest {
            model: MODEL,
            messages: vec![Message {
                role: "user",
                content: request.prompt(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {}", self.endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        if !status.is_success() {
            bail!("API request failed with status {status}: {body}");
        }

        extract_content(&body)
    }
}

/// Pulls the translated text out of a response body.
///
/// Accepts `choices[0].message.content` or a top-level `content` string.
fn extract_content(body: &str) -> Result<String> {
    let response: CompletionResponse = serde_json::from_str(body)
        .with_context(|| format!("Unexpected API response format: {body}"))?;

    let content = match response.choices.as_deref() {
        Some([first, ..]) => first
            .message
            .as_ref()
            .and_then(|message| message.content.as_deref()),
        _ => response.content.as_deref(),
    };

    content
        .map(|content| content.trim().to_string())
        .ok_or_else(|| anyhow!("Unexpected API response format: {body}"))
}
