pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(page::page_handler))
        .route("/me.jpg", get(page::portrait_handler));

    // The page lives under a single fixed base path; there are no other routes.
    let router = if state.config.base_path == "/" {
        Router::new().merge(page_routes)
    } else {
        Router::new().nest(&state.config.base_path, page_routes)
    };

    router
        .route("/health", get(health::health_handler))
        .with_state(state)
}
