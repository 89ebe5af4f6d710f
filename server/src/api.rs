use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use ideagraph_core::error::IdeagraphError;
use ideagraph_core::model::IdeaGraph;
use ideation::IdeationError;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateIdeasRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateIdeasResponse {
    pub graph: IdeaGraph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Uniform error envelope for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
    pub path: String,
    pub timestamp: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    kind: &'static str,
    path: String,
}

impl ApiError {
    pub fn from_ideation(err: IdeationError, path: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(err.error_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let kind = match &err {
            IdeationError::Configuration(_) => "ConfigurationError",
            IdeationError::Upstream { .. } => "UpstreamError",
            IdeationError::Transport(_) => "UpstreamError",
            IdeationError::EmptyContent => "EmptyContentError",
            IdeationError::InvalidTopic(_) => "Bad Request",
        };

        Self {
            status,
            message: err.to_string(),
            kind,
            path: path.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            kind: "Bad Request",
            path: path.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            warn!("{} {} -> {}: {}", self.kind, self.path, self.status, self.message);
        }

        let body = ErrorBody {
            status_code: self.status.as_u16(),
            message: self.message,
            error: self.kind.to_string(),
            path: self.path,
            timestamp: Utc::now().to_rfc3339(),
        };
        (self.status, Json(body)).into_response()
    }
}
