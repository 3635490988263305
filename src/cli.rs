//! Command-line interface definition for Jewel
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands to run the web server, inspect the prize catalog,
//! and generate a single idea from the terminal.

use clap::{Parser, Subcommand};

/// Jewel - hackathon idea generator and mentor chat
#[derive(Parser, Debug, Clone)]
#[command(name = "jewel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Jewel
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the available tracks and prize categories
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one project idea and print it
    Idea {
        /// Track to build for
        #[arg(short, long)]
        track: String,

        /// Prize category to target (repeatable)
        #[arg(short, long = "prize", required = true)]
        prizes: Vec<String>,

        /// Print rendered HTML instead of markdown
        #[arg(long)]
        html: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Serve {
                host: None,
                port: None,
            },
        }
    }
}
