use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("generative model API key is not set")]
    MissingApiKey,
    #[error("generative model API error {status} {reason}: {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("undecodable model response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Narrow seam around the external text model: one prompt in, raw text out.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn send_prompt(&self, prompt: &str) -> Result<String, LlmError>;

    fn model_id(&self) -> &str;
}

enum CannedReply {
    Text(String),
    Status {
        status: u16,
        reason: String,
        body: String,
    },
}

/// Replies with a fixed text (or a fixed HTTP failure) and remembers every prompt.
pub struct StaticClient {
    reply: CannedReply,
    prompts: Mutex<Vec<String>>,
}

impl StaticClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: CannedReply::Text(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            reply: CannedReply::Status {
                status,
                reason: reason.into(),
                body: body.into(),
            },
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeClient for StaticClient {
    async fn send_prompt(&self, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            CannedReply::Text(text) => Ok(text.clone()),
            CannedReply::Status {
                status,
                reason,
                body,
            } => Err(LlmError::Status {
                status: *status,
                reason: reason.clone(),
                body: body.clone(),
            }),
        }
    }

    fn model_id(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_client_records_prompts() {
        let client = StaticClient::new("1. Idea - Desc");
        let reply = client.send_prompt("first").await.unwrap();
        client.send_prompt("second").await.unwrap();

        assert_eq!(reply, "1. Idea - Desc");
        assert_eq!(client.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_failing_client_returns_status_error() {
        let client = StaticClient::failing(429, "Too Many Requests", "quota exhausted");
        let err = client.send_prompt("prompt").await.unwrap_err();

        match err {
            LlmError::Status {
                status,
                reason,
                body,
            } => {
                assert_eq!(status, 429);
                assert_eq!(reason, "Too Many Requests");
                assert_eq!(body, "quota exhausted");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
