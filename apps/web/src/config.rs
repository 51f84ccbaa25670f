use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. Every
/// variable has a default, so the service starts bare.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the five JSON documents and the portrait image.
    pub content_dir: String,
    /// When set, documents are fetched from this base URL instead of read
    /// from `content_dir`.
    pub content_url: Option<String>,
    /// Fixed base path the single page route is served under.
    pub base_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            content_dir: std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string()),
            content_url: std::env::var("CONTENT_URL").ok().filter(|v| !v.is_empty()),
            base_path: std::env::var("BASE_PATH").unwrap_or_else(|_| "/".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
