//! HTTP server entry point.
//! Loads the configuration, then serves the validation API until Ctrl-C.

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{info, warn};
use user_input::{backend::router::get_router, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let app = get_router(&config);

    info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server stopped unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C, shutdown must be forced: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
