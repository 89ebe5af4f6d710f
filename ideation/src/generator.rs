use crate::assembler::assemble_graph;
use crate::focus::{detect_topic_focus, TopicFocus};
use crate::lines::parse_idea_lines;
use crate::prompt::compose_prompt;
use crate::scripts::parse_script_blocks;
use crate::splitter::split_response;
use chrono::{DateTime, Utc};
use ideagraph_core::config::GeminiConfig;
use ideagraph_core::error::{ErrorCode, IdeagraphError};
use ideagraph_core::metrics::MetricsCollector;
use ideagraph_core::model::IdeaGraph;
use llm::{GeminiClient, GenerativeClient, LlmError};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

pub const MAX_TOPIC_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum IdeationError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("generative model error {status} {reason}: {body}")]
    Upstream {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("generative model unreachable: {0}")]
    Transport(String),
    #[error("generative model returned an empty response")]
    EmptyContent,
    #[error("invalid topic: {0}")]
    InvalidTopic(String),
}

impl IdeagraphError for IdeationError {
    fn error_code(&self) -> ErrorCode {
        match self {
            IdeationError::Configuration(_) => ErrorCode::FailedPrecondition,
            IdeationError::Upstream { .. }
            | IdeationError::Transport(_)
            | IdeationError::EmptyContent => ErrorCode::Unavailable,
            IdeationError::InvalidTopic(_) => ErrorCode::InvalidArgument,
        }
    }
}

impl From<LlmError> for IdeationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => IdeationError::Configuration(err.to_string()),
            LlmError::Status {
                status,
                reason,
                body,
            } => IdeationError::Upstream {
                status,
                reason,
                body,
            },
            LlmError::Transport(_) | LlmError::Decode(_) => {
                IdeationError::Transport(err.to_string())
            }
        }
    }
}

/// Rejects blank topics and topics longer than [`MAX_TOPIC_CHARS`].
pub fn validate_topic(topic: &str) -> Result<(), IdeationError> {
    if topic.trim().is_empty() {
        return Err(IdeationError::InvalidTopic(
            "topic should not be empty".to_string(),
        ));
    }
    if topic.chars().count() > MAX_TOPIC_CHARS {
        return Err(IdeationError::InvalidTopic(format!(
            "Topic is too long. Maximum length is {MAX_TOPIC_CHARS} characters."
        )));
    }
    Ok(())
}

/// Turns a raw model reply into a graph. Fails only when no idea line survives.
pub fn parse_reply(
    topic: &str,
    focus: &TopicFocus,
    raw: &str,
    generated_at: DateTime<Utc>,
) -> Result<IdeaGraph, IdeationError> {
    let sections = split_response(raw);
    let ideas = parse_idea_lines(sections.idea_list, topic, focus);
    if ideas.is_empty() {
        return Err(IdeationError::EmptyContent);
    }

    let scripts = parse_script_blocks(sections.scripts);
    debug!(
        "Parsed {} idea lines and {} script blocks",
        ideas.len(),
        scripts.len()
    );

    Ok(assemble_graph(topic, ideas, &scripts, generated_at))
}

pub struct IdeaGenerator {
    client: Arc<dyn GenerativeClient>,
    metrics: MetricsCollector,
}

impl IdeaGenerator {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            client,
            metrics: MetricsCollector::default(),
        }
    }

    pub fn with_metrics(client: Arc<dyn GenerativeClient>, metrics: MetricsCollector) -> Self {
        Self { client, metrics }
    }

    /// Builds a Gemini-backed generator; a missing credential is a configuration error.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, IdeationError> {
        let client = GeminiClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    pub fn model_id(&self) -> &str {
        self.client.model_id()
    }

    pub async fn generate_ideas(&self, topic: &str) -> Result<IdeaGraph, IdeationError> {
        let started = Instant::now();
        let result = self.generate_internal(topic).await;
        let latency_us = started.elapsed().as_micros() as u64;

        match &result {
            Ok(graph) => {
                self.metrics.record_success(latency_us, graph.nodes.len());
                info!(
                    "Generated {} ideas for topic {:?} with {}",
                    graph.nodes.len(),
                    topic,
                    self.client.model_id()
                );
            }
            Err(err) => {
                self.metrics.record_failure(latency_us);
                error!("Idea generation failed for topic {:?}: {}", topic, err);
            }
        }

        result
    }

    async fn generate_internal(&self, topic: &str) -> Result<IdeaGraph, IdeationError> {
        let focus = detect_topic_focus(topic);
        if focus.is_narrowed() {
            debug!(
                "Topic focus: platforms={:?} formats={:?}",
                focus.platforms, focus.formats
            );
        }

        let prompt = compose_prompt(topic, &focus);
        let raw = self.client.send_prompt(&prompt).await?;
        if raw.trim().is_empty() {
            return Err(IdeationError::EmptyContent);
        }

        parse_reply(topic, &focus, &raw, Utc::now())
    }
}
