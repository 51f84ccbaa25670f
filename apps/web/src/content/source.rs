//! Data source adapter — a uniform read interface over the two content
//! strategies: bundled files on disk or a remote fetch. Callers cannot tell
//! which one they got.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::content::Document;

/// The single failure kind for document loading. Transport errors, HTTP error
/// statuses, and malformed bodies all collapse into it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to load {document}: {message}")]
pub struct FetchError {
    pub document: Document,
    pub message: String,
}

impl FetchError {
    fn new(document: Document, message: impl Into<String>) -> Self {
        FetchError {
            document,
            message: message.into(),
        }
    }
}

/// Resolves the raw body of a named content document.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, doc: Document) -> Result<String, FetchError>;
}

/// Reads documents from a local directory.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSource { dir: dir.into() }
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, doc: Document) -> Result<String, FetchError> {
        let path = self.dir.join(doc.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::new(doc, format!("{}: {e}", path.display())))
    }
}

/// Fetches documents over HTTP from a base URL.
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpSource {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, doc: Document) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, doc.file_name());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::new(doc, e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| FetchError::new(doc, e.to_string()))
    }
}

/// Fetches one document and parses its JSON body. A failure is logged here,
/// at the adapter boundary, and surfaced only through the returned value —
/// there is no retry.
pub async fn load_json<T: DeserializeOwned>(
    source: &dyn ContentSource,
    doc: Document,
) -> Result<T, FetchError> {
    let result = match source.fetch(doc).await {
        Ok(body) => serde_json::from_str(&body)
            .map_err(|e| FetchError::new(doc, format!("malformed JSON: {e}"))),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        error!("error fetching the {doc} data: {}", e.message);
    }
    result
}
