//! Event Log HTTP Server binary entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use eventlog::EventLog;
use eventlog::server::{CliArgs, HttpServer, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    let log_config = args.to_log_config();
    let server_config = ServerConfig::from(&args);

    tracing::info!("Opening event log at {:?}", log_config.log_file);

    let log = EventLog::open(log_config)
        .await
        .expect("Failed to open event log");

    // Create and run the server
    let server = HttpServer::new(Arc::new(log), server_config);
    server.run().await;
}
