//! Fault report server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p fault-api
//! ```
//!
//! Configuration is loaded from environment variables (or a .env file).

use fault_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so tracing can pick the right format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Starting fault report server"
    );

    if let Err(e) = fault_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
