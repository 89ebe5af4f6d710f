use crate::api::{ApiError, GenerateIdeasRequest, GenerateIdeasResponse, HealthResponse};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ideagraph_core::metrics::MetricsSnapshot;
use ideation::{validate_topic, IdeationError};

pub const SERVICE_NAME: &str = "ideagraph-server";

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn generate_ideas(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<GenerateIdeasRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GenerateIdeasResponse>), ApiError> {
    let path = uri.path().to_string();
    let Json(request) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text(), &path))?;

    validate_topic(&request.topic).map_err(|err| ApiError::from_ideation(err, &path))?;

    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiError::from_ideation(
            IdeationError::Configuration(format!(
                "{} is not set",
                ideagraph_core::config::GEMINI_API_KEY_VAR
            )),
            &path,
        )
    })?;

    let graph = generator
        .generate_ideas(&request.topic)
        .await
        .map_err(|err| ApiError::from_ideation(err, &path))?;

    Ok((StatusCode::CREATED, Json(GenerateIdeasResponse { graph })))
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
