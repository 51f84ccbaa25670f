use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::content::status::ContentState;

/// Shared application state injected into route handlers via axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-document load status — written by the five loader tasks, read by
    /// every page request.
    pub content: Arc<RwLock<ContentState>>,
    pub config: Config,
}
