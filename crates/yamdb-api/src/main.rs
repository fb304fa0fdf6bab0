//! YaMDb API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p yamdb-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use tracing::{error, info};
use yamdb_common::{try_init_tracing_with_config, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // RUST_LOG may come from .env, so load it before tracing starts
    let _ = dotenvy::dotenv();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting YaMDb API Server"
    );

    if let Err(e) = yamdb_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
