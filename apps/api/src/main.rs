mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::ResumeChat;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::models::resume::ResumeSnapshot;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Resume content is loaded once and never changes while serving
    let resume = ResumeSnapshot::load(&config.resume_path)
        .with_context(|| format!("Failed to load resume from {}", config.resume_path))?;
    info!(
        "Resume loaded for {} ({} projects)",
        resume.name,
        resume.projects.len()
    );

    // Initialize LLM client
    let mut llm = GeminiClient::new(config.gemini_api_key.clone())?;
    if let Some(model) = &config.gemini_model {
        llm = llm.with_model(model);
    }
    if let Some(base_url) = &config.gemini_base_url {
        llm = llm.with_base_url(base_url);
    }
    if llm.has_credential() {
        info!("LLM client initialized (model: {})", llm.model());
    } else {
        warn!("GEMINI_API_KEY is not set; chat widget will answer in demo mode");
    }

    let chat = ResumeChat::new(Arc::new(resume), Arc::new(llm));
    debug!(
        "System instruction assembled ({} chars)",
        chat.system_instruction().len()
    );

    if let Some(dir) = &config.static_dir {
        info!("Serving static bundle from {dir} at {}", config.base_path);
    }

    let state = AppState {
        chat,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the deployed site origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
