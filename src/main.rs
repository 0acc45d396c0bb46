//! URL Scan Service Entry Point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use urlscan_service::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urlscan_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting URL Scan Service");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = urlscan_service::run(config).await {
        tracing::error!("Service error: {}", e);
        std::process::exit(1);
    }
}
