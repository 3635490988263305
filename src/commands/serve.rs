//! `jewel serve`: run the web server

use crate::config::Config;
use crate::error::Result;
use crate::server;

/// Runs the web server with the loaded configuration
///
/// # Errors
///
/// Returns error if state construction, binding, or serving fails
pub async fn run_serve(config: Config) -> Result<()> {
    tracing::info!(
        "Starting web server on {}:{}",
        config.server.host,
        config.server.port
    );
    server::serve(&config).await
}
