use std::path::Path;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use maud::Markup;

use crate::content::status::PageState;
use crate::errors::AppError;
use crate::language::PageQuery;
use crate::render;
use crate::state::AppState;

/// GET /
/// The whole CV as a single HTML document. The aggregate load state decides
/// between the loading panel, the error panel, and the full layout.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Markup, AppError> {
    let lang = params.language();
    let content = state.content.read().await;
    let page = match content.page_state() {
        PageState::Loading => render::loading_page(),
        PageState::Error { failed } => render::error_page(&failed),
        PageState::Ready => {
            let snapshot = content
                .snapshot()
                .ok_or_else(|| anyhow::anyhow!("ready state without a full snapshot"))?;
            render::page(&snapshot, lang)
        }
    };
    Ok(page)
}

/// GET /me.jpg
/// The portrait image, served from the content directory.
pub async fn portrait_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = Path::new(&state.config.content_dir).join("me.jpg");
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound("portrait image".to_string()))?;
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], Bytes::from(bytes)).into_response())
}
