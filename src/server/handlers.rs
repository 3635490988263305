//! HTTP request handlers
//!
//! Every handler resolves the caller's session first and returns it with the
//! response, so a newly assigned session cookie is always written back.

use crate::error::JewelError;
use crate::history::ChatTurn;
use crate::prompts::build_idea_prompt;
use crate::render::render_markdown;
use crate::server::session::Session;
use crate::server::AppState;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Error message returned when a chat message is missing or blank
pub const EMPTY_MESSAGE: &str = "Message cannot be empty.";

/// Body of `POST /generate_idea`
#[derive(Debug, Default, Deserialize)]
pub struct IdeaRequest {
    /// Selected track name
    #[serde(default)]
    pub track: Option<String>,
    /// Selected prize names
    #[serde(default)]
    pub prizes: Vec<String>,
}

/// Body of `POST /chat`
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful JSON response carrying rendered HTML
#[derive(Debug, Serialize, Deserialize)]
pub struct HtmlResponse {
    /// Model output rendered as an HTML fragment
    pub response: String,
}

/// JSON error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message
    pub error: String,
}

/// An error ready to be sent as `{ "error": ... }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<JewelError>() {
            Some(JewelError::InvalidRequest(msg)) => Self::new(StatusCode::BAD_REQUEST, msg.clone()),
            Some(JewelError::Upstream(msg)) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// `GET /`: the main page
///
/// A returning session's history is materialized here. A session assigned on
/// this request gets no store entry until its first turn, so cookieless
/// clients (crawlers, health checks) leave nothing behind.
pub async fn index(State(state): State<AppState>, session: Session) -> Response {
    let result = if session.is_new {
        state.pages().render_index(state.catalog())
    } else {
        state
            .history()
            .get_or_create(&session.id)
            .and_then(|_| state.pages().render_index(state.catalog()))
    };

    match result {
        Ok(page) => (session, Html(page)).into_response(),
        Err(e) => {
            tracing::error!(session = %session.id, "Failed to render index: {}", e);
            (session, ApiError::from(e)).into_response()
        }
    }
}

/// `POST /generate_idea`: one stateless idea-generation call
pub async fn generate_idea(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<IdeaRequest>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(request)) => run_generate_idea(&state, &session, request).await,
        Err(rejection) => Err(rejection.into()),
    };
    respond(session, result)
}

async fn run_generate_idea(
    state: &AppState,
    session: &Session,
    request: IdeaRequest,
) -> Result<HtmlResponse, ApiError> {
    let track = request.track.unwrap_or_default();
    let idea = build_idea_prompt(state.catalog(), &track, &request.prizes)?;

    tracing::info!(
        session = %session.id,
        track = %track.trim(),
        prizes = request.prizes.len(),
        "Generating idea"
    );

    // Recorded before the call so it survives an upstream failure
    state
        .history()
        .append(&session.id, ChatTurn::user(idea.summary))?;

    let markdown = state.client().generate(&idea.prompt).await.map_err(|e| {
        tracing::error!(session = %session.id, "Idea generation failed: {}", e);
        e
    })?;

    state
        .history()
        .append(&session.id, ChatTurn::model(markdown.clone()))?;

    Ok(HtmlResponse {
        response: render_markdown(&markdown),
    })
}

/// `POST /chat`: continue the session's conversation
pub async fn chat(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(request)) => run_chat(&state, &session, request).await,
        Err(rejection) => Err(rejection.into()),
    };
    respond(session, result)
}

async fn run_chat(
    state: &AppState,
    session: &Session,
    request: ChatRequest,
) -> Result<HtmlResponse, ApiError> {
    let message = request.message.unwrap_or_default();
    if message.trim().is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, EMPTY_MESSAGE));
    }

    let prior = state.history().get_or_create(&session.id)?;
    state
        .history()
        .append(&session.id, ChatTurn::user(message.clone()))?;

    tracing::info!(
        session = %session.id,
        prior_turns = prior.len(),
        "Continuing chat"
    );

    let markdown = state
        .client()
        .continue_chat(&prior, &message)
        .await
        .map_err(|e| {
            tracing::error!(session = %session.id, "Chat call failed: {}", e);
            e
        })?;

    state
        .history()
        .append(&session.id, ChatTurn::model(markdown.clone()))?;

    Ok(HtmlResponse {
        response: render_markdown(&markdown),
    })
}

fn respond(session: Session, result: Result<HtmlResponse, ApiError>) -> Response {
    match result {
        Ok(body) => (session, Json(body)).into_response(),
        Err(err) => {
            tracing::debug!(
                session = %session.id,
                status = %err.status(),
                "Request failed: {}",
                err.message
            );
            (session, err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let err: anyhow::Error = JewelError::InvalidRequest("bad".to_string()).into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "bad");
    }

    #[test]
    fn test_upstream_maps_to_500_verbatim() {
        let err: anyhow::Error = JewelError::Upstream("Resource exhausted".to_string()).into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Resource exhausted");
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let err: anyhow::Error = JewelError::Storage("poisoned".to_string()).into();
        let api = ApiError::from(err);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "Storage error: poisoned");
    }

    #[test]
    fn test_request_bodies_default_missing_fields() {
        let idea: IdeaRequest = serde_json::from_str("{}").unwrap();
        assert!(idea.track.is_none());
        assert!(idea.prizes.is_empty());

        let chat: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(chat.message.is_none());
    }
}
