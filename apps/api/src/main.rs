mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the LLM client when a credential is configured. Without one
    // the service still serves /health; the analyze endpoint reports the
    // missing configuration instead of calling out.
    let llm: Option<Arc<dyn LlmClient>> = match &config.openai_api_key {
        Some(api_key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(OpenAiClient::new(
                api_key.clone(),
                config.openai_base_url.clone(),
            )))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; the analyze endpoint will refuse requests");
            None
        }
    };

    let state = AppState { llm };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
