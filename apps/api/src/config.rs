use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The Gemini key is optional: without it the chat widget runs in demo mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
    pub resume_path: String,
    pub base_path: String,
    pub static_dir: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            // API_KEY is the name the site's original bundle read the key from
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            gemini_model: optional_env("GEMINI_MODEL"),
            gemini_base_url: optional_env("GEMINI_BASE_URL"),
            resume_path: optional_env("RESUME_PATH")
                .unwrap_or_else(|| "data/resume.json".to_string()),
            base_path: normalize_base_path(
                &optional_env("BASE_PATH").unwrap_or_else(|| "/portfolio/".to_string()),
            ),
            static_dir: optional_env("STATIC_DIR"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Axum wants nest paths with a leading slash and no trailing slash.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}
