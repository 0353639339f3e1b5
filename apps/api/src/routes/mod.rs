pub mod health;

use axum::{routing::get, Router};

use crate::directory::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chef directory
        .route("/api/v1/chefs", get(handlers::handle_list_chefs))
        .route(
            "/api/v1/chefs/professions",
            get(handlers::handle_list_professions),
        )
        .route("/api/v1/chefs/:id", get(handlers::handle_get_chef))
        // Viewer profile
        .route("/api/v1/me", get(handlers::handle_get_me))
        .with_state(state)
}
