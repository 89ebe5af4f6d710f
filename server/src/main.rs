use anyhow::Context;
use ideagraph_core::config::AppConfig;
use ideagraph_server::{create_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    ideagraph_core::init_tracing(&config.logging);

    let state = AppState::from_config(&config);
    let app = create_router(state, &config.server.cors_origins);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Idea graph server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
