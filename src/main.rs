//! Jewel - hackathon idea generator and mentor chat
//!
#![doc = "Main entry point for the Jewel web server and CLI."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jewel::catalog::Catalog;
use jewel::cli::{Cli, Commands};
use jewel::commands;
use jewel::config::Config;
use jewel::providers;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv = dotenvy::dotenv();

    // Parse command line arguments
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Serve { .. } => {
            commands::serve::run_serve(config).await?;
            Ok(())
        }
        Commands::Catalog { json } => {
            commands::catalog::show_catalog(&Catalog::mlh(), json)?;
            Ok(())
        }
        Commands::Idea {
            track,
            prizes,
            html,
        } => {
            tracing::debug!("Idea request: track={}, prizes={:?}", track, prizes);
            let client = providers::create_client(&config.model)?;
            let output =
                commands::idea::generate_idea(client.as_ref(), &Catalog::mlh(), &track, &prizes, html)
                    .await?;
            println!("{}", output);
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "jewel=debug" } else { "jewel=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
