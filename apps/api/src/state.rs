use crate::chat::ResumeChat;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume chat adapter; owns the snapshot and the model client.
    pub chat: ResumeChat,
    pub config: Config,
}
