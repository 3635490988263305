//! Web server for Jewel
//!
//! This module wires the history store, model client, catalog and page
//! renderer into an axum router.
//!
//! # Routes
//!
//! - `GET /` renders the main page
//! - `POST /generate_idea` generates a project idea for a track and prizes
//! - `POST /chat` continues the session's conversation

pub mod handlers;
pub mod page;
pub mod session;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{JewelError, Result};
use crate::history::{HistoryStore, MemoryHistoryStore};
use crate::providers::{self, ModelClient};

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use page::PageRenderer;
use std::sync::Arc;

/// Shared state handed to every handler
///
/// Everything is reference counted, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    history: Arc<dyn HistoryStore>,
    client: Arc<dyn ModelClient>,
    pages: Arc<PageRenderer>,
    cookie_key: Key,
    cookie_name: Arc<str>,
}

impl AppState {
    /// Assembles handler state from its collaborators
    ///
    /// # Errors
    ///
    /// Returns error if the page templates fail to compile
    pub fn new(
        catalog: Catalog,
        history: Arc<dyn HistoryStore>,
        client: Arc<dyn ModelClient>,
        cookie_key: Key,
        cookie_name: impl Into<Arc<str>>,
    ) -> Result<Self> {
        Ok(Self {
            catalog: Arc::new(catalog),
            history,
            client,
            pages: Arc::new(PageRenderer::new()?),
            cookie_key,
            cookie_name: cookie_name.into(),
        })
    }

    /// Builds production state from configuration
    ///
    /// Uses the built-in catalog, an in-memory history store and the
    /// Gemini client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = providers::create_client(&config.model)?;
        let key = session::cookie_key(config.session.secret_key.as_deref());
        Self::new(
            Catalog::mlh(),
            Arc::new(MemoryHistoryStore::new()),
            client,
            key,
            config.session.cookie_name.as_str(),
        )
    }

    /// Static reference data
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session history store
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }

    /// Model client
    pub fn client(&self) -> &dyn ModelClient {
        self.client.as_ref()
    }

    /// Page renderer
    pub fn pages(&self) -> &PageRenderer {
        &self.pages
    }

    /// Name of the session cookie
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate_idea", post(handlers::generate_idea))
        .route("/chat", post(handlers::chat))
        .with_state(state)
}

/// Runs the web server until Ctrl-C
///
/// # Errors
///
/// Returns error if the listener cannot be bound or the server fails
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| JewelError::Config(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(
        "Jewel listening on http://{} (model: {})",
        addr,
        config.model.model
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
