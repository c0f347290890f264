use anyhow::{Context, Result};

/// Default OpenAI endpoint. Override with OPENAI_BASE_URL for proxies or tests.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Application configuration loaded from environment variables.
/// Every value has a default except the provider credential, which may be
/// absent: the service still boots and serves /health, and the analyze
/// endpoint reports the missing configuration instead of calling out.
// NOTE: no Debug derive; `openai_api_key` must not leak into log output.
#[derive(Clone)]
pub struct Config {
    /// OpenAI API key. `None` until OPENAI_API_KEY is set to a non-blank value.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
