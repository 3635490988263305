//! Jewel - hackathon idea generator and mentor chat library
//!
//! This library provides a small web backend that turns a hackathon track and
//! prize selection into a project idea via the Gemini API, and a mentor chat
//! endpoint that keeps per-session conversation history.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `catalog`: Static tracks and prize categories
//! - `history`: Per-session conversation history store
//! - `prompts`: Jewel persona and idea-generation prompt
//! - `providers`: Model client abstraction and Gemini implementation
//! - `render`: Markdown to HTML conversion
//! - `server`: axum router, handlers and session cookies
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use jewel::{server, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!     server::serve(&config).await
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod prompts;
pub mod providers;
pub mod render;
pub mod server;

// Re-export commonly used types
pub use catalog::{Catalog, PrizeCategory};
pub use config::Config;
pub use error::{JewelError, Result};
pub use history::{ChatTurn, HistoryStore, MemoryHistoryStore, Role, SessionId};
pub use providers::{GeminiClient, ModelClient};

#[cfg(test)]
pub mod test_utils;
