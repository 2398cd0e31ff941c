use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use formcollector::config::Config;
use formcollector::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting formcollector");

    let result = match config {
        Ok(config) => formcollector::run(config).await,
        Err(msg) => Err(StartupError::Config(msg)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
