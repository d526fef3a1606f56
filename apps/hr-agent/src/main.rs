mod config;
mod input;
mod llm_client;
mod modes;
mod money;
mod profile;
mod prompts;
mod session;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::input::TerminalLines;
use crate::llm_client::AnthropicClient;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{} {e:#}\n", "❌ Error:".red());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with answers on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let Some(api_key) = config.anthropic_api_key.clone() else {
        session::print_credential_help(&mut io::stderr())?;
        anyhow::bail!("ANTHROPIC_API_KEY environment variable is not set");
    };

    let mut llm = AnthropicClient::new(Some(api_key))?;
    if let Some(model) = &config.anthropic_model {
        llm = llm.with_model(model);
    }
    if let Some(base_url) = &config.anthropic_base_url {
        llm = llm.with_base_url(base_url);
    }
    info!("LLM client initialized (model: {})", llm.model());

    let input = TerminalLines::new()?;
    session::run(&config.profile_path, Arc::new(llm), input, io::stdout()).await
}
