use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vitalwatch::alert::LogAlertSender;
use vitalwatch::api::rest::RestApi;
use vitalwatch::config::{load_config, Config};
use vitalwatch::directory::InMemoryPatientDirectory;
use vitalwatch::error::VitalError;
use vitalwatch::monitor::VitalSignMonitor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = Path::new("config.yaml");
    let config = if config_path.exists() {
        load_config(config_path).map_err(VitalError::from)?
    } else {
        warn!("config.yaml not found, using defaults");
        Config::default()
    };

    // Seed the directory with the records listed in the config
    let directory = Arc::new(InMemoryPatientDirectory::new());
    for record in &config.patients {
        directory.insert(record.clone());
    }
    info!("registered {} patient records", directory.len());

    let alerter = Arc::new(LogAlertSender::new());
    let monitor = Arc::new(VitalSignMonitor::with_tolerances(
        directory.clone(),
        alerter,
        config.monitor,
    ));

    let api = RestApi::new(monitor, directory);

    info!("Starting server on {}:{}", config.api.host, config.api.port);

    let addr: std::net::SocketAddr = format!("{}:{}", config.api.host, config.api.port).parse()?;

    // Create a channel for shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    // Set up server with graceful shutdown
    let routes = api.routes();
    let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async move {
        shutdown_rx.await.ok();
        info!("Shutting down server...");
    });

    let server_handle = tokio::spawn(server);

    // Wait for Ctrl+C
    signal::ctrl_c().await?;
    info!("Ctrl+C received, starting graceful shutdown");

    shutdown_tx.send(()).ok();
    server_handle.await?;

    info!("Server shutdown complete");
    Ok(())
}
