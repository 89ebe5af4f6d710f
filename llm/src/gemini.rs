//! Gemini `generateContent` client.

use crate::client::{GenerativeClient, LlmError};
use async_trait::async_trait;
use ideagraph_core::config::GeminiConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
    #[serde(default)]
    total_token_count: Option<u32>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, LlmError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The key travels in a header, so the URL is safe to log or surface in errors.
    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn send_prompt(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.endpoint();
        debug!("Sending prompt to Gemini: {}", url);

        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| LlmError::Transport(err.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LlmError::Transport(err.without_url()))?;

        if !status.is_success() {
            error!("Gemini API error: {} - {}", status, body);
            return Err(LlmError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        extract_reply_text(&body)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// Joins the text of every part of the first candidate. A reply without
/// candidates or parts yields an empty string; deciding whether that is an error
/// is up to the caller.
pub fn extract_reply_text(body: &str) -> Result<String, LlmError> {
    let response: GeminiResponse = serde_json::from_str(body)?;

    if let Some(usage) = &response.usage_metadata {
        info!(
            "Gemini usage - prompt: {:?} tokens, response: {:?} tokens, total: {:?} tokens",
            usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
        );
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text.unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    Ok(text)
}
