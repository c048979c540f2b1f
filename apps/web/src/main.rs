mod config;
mod drafting;
mod errors;
mod form;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::drafting::generator::DocumentGenerator;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (a missing API key disables generation, it does not abort)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting docdraft v{}", env!("CARGO_PKG_VERSION"));

    let generator = build_generator(&config)?;

    let state = AppState { generator };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds the OpenAI client to the credential once, for the lifetime of the process.
fn build_generator(config: &Config) -> Result<DocumentGenerator> {
    match &config.openai_api_key {
        Some(api_key) => {
            let client = OpenAiClient::new(api_key.clone(), config.openai_base_url.clone())?;
            info!(
                "LLM client initialized (model: {}, base url: {})",
                llm_client::MODEL,
                config.openai_base_url
            );
            Ok(DocumentGenerator::new(Arc::new(client)))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; document generation is disabled");
            Ok(DocumentGenerator::disabled())
        }
    }
}
