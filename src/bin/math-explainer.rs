//! Math Explainer Server Binary
//!
//! Runs the explanation API as a standalone axum server.

use math_explainer::{
    api::{build_router, AppState},
    config::Config,
    explain::{Explainer, ExplainerSettings},
    provider::OpenRouterClient,
    shutdown::shutdown_signal,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    let env_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()))
    };

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_thread_ids(true)
                .with_level(true)
                .json()
                .with_env_filter(env_filter())
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_thread_ids(true)
                .with_level(true)
                .compact()
                .with_env_filter(env_filter())
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_thread_ids(true)
                .with_level(true)
                .with_env_filter(env_filter())
                .init();
        }
    }

    info!("Starting Math Explainer Server");
    info!(model = %config.provider.model, "Configuration loaded and validated");

    if config.provider.api_key.is_none() {
        warn!("No default provider API key configured; requests must supply apiKey");
    }

    let provider = Arc::new(OpenRouterClient::new(config.provider.clone())?);
    let explainer = Explainer::new(provider, ExplainerSettings::from_config(&config));

    let app = build_router(
        AppState { explainer },
        config.server.max_body_size_bytes(),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
