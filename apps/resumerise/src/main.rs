use std::sync::Arc;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumerise::config::Config;
use resumerise::scoring_client::HttpScoringClient;
use resumerise::terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout belongs to the form.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting ResumeRise client v{}", env!("CARGO_PKG_VERSION"));

    let client = HttpScoringClient::new(&config.api_url)?;
    info!("Scoring endpoint: {}", client.endpoint());

    terminal::run(
        Arc::new(client),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
