pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let base_path = state.config.base_path.clone();

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .with_state(state);

    // Built site bundle, served under the configured base path
    match static_dir {
        Some(dir) if base_path == "/" => router.fallback_service(ServeDir::new(dir)),
        Some(dir) => router.nest_service(&base_path, ServeDir::new(dir)),
        None => router,
    }
}
