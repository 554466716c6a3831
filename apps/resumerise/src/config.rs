use anyhow::{bail, Context, Result};
use reqwest::Url;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scoring service, e.g. `http://localhost:8000`.
    pub api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_url = std::env::var("RESUMERISE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Config {
            api_url: validate_api_url(&api_url)
                .context("RESUMERISE_API_URL must be an absolute http(s) URL")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).with_context(|| format!("invalid URL '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}'", url.scheme());
    }
    Ok(raw.to_string())
}
