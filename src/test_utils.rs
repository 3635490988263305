//! Test utilities for Jewel
//!
//! This module provides a scripted model client and helpers for driving the
//! router in-process.

use crate::catalog::Catalog;
use crate::error::{JewelError, Result};
use crate::history::{ChatTurn, HistoryStore, MemoryHistoryStore};
use crate::providers::ModelClient;
use crate::server::{self, session::cookie_key, AppState};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// A call received by [`ScriptedClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `generate(prompt)`
    Generate(String),
    /// `continue_chat(history, message)`
    Chat(Vec<ChatTurn>, String),
}

/// Model client that replays scripted replies and records its calls
///
/// `Ok` entries are returned as model text; `Err` entries become
/// `JewelError::Upstream` with that message. An exhausted script fails.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    /// Creates a client with the given replies, consumed in order
    pub fn new(replies: Vec<std::result::Result<&str, &str>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Result<String> {
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(JewelError::Upstream(message).into()),
            None => Err(JewelError::Upstream("script exhausted".to_string()).into()),
        }
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Generate(prompt.to_string()));
        self.next_reply()
    }

    async fn continue_chat(&self, history: &[ChatTurn], new_message: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Chat(history.to_vec(), new_message.to_string()));
        self.next_reply()
    }

    fn model_name(&self) -> String {
        "scripted".to_string()
    }
}

/// A router wired to a scripted client and an inspectable history store
pub struct TestApp {
    /// Router under test
    pub router: Router,
    /// The store the router writes to
    pub history: Arc<MemoryHistoryStore>,
    /// The scripted client the router calls
    pub client: Arc<ScriptedClient>,
}

impl TestApp {
    /// Builds a test app replaying `replies`
    pub fn new(replies: Vec<std::result::Result<&str, &str>>) -> Self {
        let history = Arc::new(MemoryHistoryStore::new());
        let client = Arc::new(ScriptedClient::new(replies));
        let state = AppState::new(
            Catalog::mlh(),
            history.clone() as Arc<dyn HistoryStore>,
            client.clone() as Arc<dyn ModelClient>,
            cookie_key(Some("test-secret-with-enough-bytes")),
            "jewel_session",
        )
        .unwrap();

        Self {
            router: server::router(state),
            history,
            client,
        }
    }

    /// Sends a request, returning status, `Set-Cookie` pair (if any) and body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        json: Option<serde_json::Value>,
    ) -> (StatusCode, Option<String>, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match json {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, set_cookie, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Sends `GET /` and returns the session cookie it assigns
    pub async fn start_session(&self) -> String {
        let (status, cookie, _) = self.send("GET", "/", None, None).await;
        assert_eq!(status, StatusCode::OK);
        cookie.expect("index should assign a session cookie")
    }

    /// Snapshot of the only stored history, empty when nothing was stored
    pub fn only_history(&self) -> Vec<ChatTurn> {
        let sessions = self.history.session_ids().unwrap();
        assert!(sessions.len() <= 1, "expected at most one session");
        match sessions.first() {
            Some(session) => self.history.get_or_create(session).unwrap(),
            None => Vec::new(),
        }
    }
}
