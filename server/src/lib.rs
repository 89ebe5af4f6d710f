pub mod api;
pub mod routes;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use ideagraph_core::config::AppConfig;
use ideagraph_core::metrics::MetricsCollector;
use ideation::{IdeaGenerator, IdeationError};
use llm::{GeminiClient, GenerativeClient};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential is configured; generation requests then fail
    /// with a configuration error while the rest of the API keeps serving.
    pub generator: Option<Arc<IdeaGenerator>>,
    pub metrics: MetricsCollector,
}

impl AppState {
    pub fn with_client(client: Arc<dyn GenerativeClient>) -> Self {
        let metrics = MetricsCollector::default();
        Self {
            generator: Some(Arc::new(IdeaGenerator::with_metrics(
                client,
                metrics.clone(),
            ))),
            metrics,
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            generator: None,
            metrics: MetricsCollector::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match GeminiClient::new(&config.gemini) {
            Ok(client) => {
                info!("Using generative model {}", config.gemini.model);
                Self::with_client(Arc::new(client))
            }
            Err(err) => {
                let err = IdeationError::from(err);
                warn!("Idea generation disabled: {}", err);
                Self::unconfigured()
            }
        }
    }
}

pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/generate-ideas", post(routes::generate_ideas))
        .route("/metrics", get(routes::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            // Credentialed CORS cannot use a wildcard; tower-http panics on it.
            if origin.trim() == "*" {
                warn!("Ignoring wildcard CORS origin; list origins explicitly");
                return None;
            }
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
