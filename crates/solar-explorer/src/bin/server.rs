//! Explorer server binary
//!
//! Run with: cargo run -p solar-explorer --bin solar-explorer-server

use solar_explorer::{config::ExplorerConfig, server::ExplorerServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solar_explorer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ExplorerConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Dataset: {}", config.dataset.source);
    tracing::info!("  - Chart enabled: {}", config.chart.enabled);
    tracing::info!("  - Service worker: {}", config.server.service_worker);

    let server = ExplorerServer::new(config).await;
    if let Some(error) = server.state().load_error() {
        tracing::warn!("Serving without data: {}", error);
    }

    println!("\nServer starting...");
    println!("  Page: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
