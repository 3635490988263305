//! Gemini provider implementation for Jewel
//!
//! This module implements the `ModelClient` trait against the Google Gemini
//! `generateContent` REST endpoint. Single prompts and multi-turn chats use
//! the same endpoint; chats replay the whole history in `contents`.

use crate::config::ModelConfig;
use crate::error::{JewelError, Result};
use crate::history::{ChatTurn, Role};
use crate::providers::ModelClient;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API client
///
/// The optional system instruction is fixed at construction time and sent
/// with every request.
///
/// # Examples
///
/// ```no_run
/// use jewel::config::ModelConfig;
/// use jewel::providers::{GeminiClient, ModelClient};
///
/// # async fn example() -> jewel::error::Result<()> {
/// let config = ModelConfig {
///     api_key: Some("my-key".to_string()),
///     ..ModelConfig::default()
/// };
/// let client = GeminiClient::new(config, Some("You are a helpful mentor.".to_string()))?;
/// let text = client.generate("Suggest a hackathon idea").await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    client: Client,
    config: ModelConfig,
    system_instruction: Option<String>,
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
}

/// A role-tagged list of parts
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// A single content part; only text parts are produced or read
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

/// Successful response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Error response body
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiContent {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    ///
    /// * `config` - API base, model, key and timeout
    /// * `system_instruction` - Persona sent as the system instruction
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: ModelConfig, system_instruction: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("jewel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JewelError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized Gemini client: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self {
            client,
            config,
            system_instruction,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, history: &[ChatTurn], new_message: &str) -> GeminiRequest {
        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|turn| GeminiContent::text(Some(turn.role.as_str()), turn.text.clone()))
            .collect();
        contents.push(GeminiContent::text(Some(Role::User.as_str()), new_message));

        GeminiRequest {
            system_instruction: self
                .system_instruction
                .as_ref()
                .map(|s| GeminiContent::text(None, s.clone())),
            contents,
        }
    }

    async fn send(&self, request: GeminiRequest) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            JewelError::Upstream(
                "No Gemini API key configured. Set GEMINI_API_KEY.".to_string(),
            )
        })?;

        tracing::debug!(
            "Sending Gemini request: model={}, {} contents",
            self.config.model,
            request.contents.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini request failed: {}", e);
                JewelError::Upstream(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini returned error {}: {}", status, error_text);
            return Err(JewelError::Upstream(upstream_error_message(status, &error_text)).into());
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            JewelError::Upstream(format!("Failed to parse Gemini response: {}", e))
        })?;

        extract_text(body)
    }
}

/// Prefers the API's own `error.message`; falls back to status and raw body
fn upstream_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorResponse>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ if body.trim().is_empty() => format!("Gemini returned error {}", status),
        _ => format!("Gemini returned error {}: {}", status, body.trim()),
    }
}

fn extract_text(body: GeminiResponse) -> Result<String> {
    let Some(candidate) = body.candidates.into_iter().next() else {
        let reason = body
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(JewelError::Upstream(format!(
            "Gemini returned no response: {}",
            reason
        ))
        .into());
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "empty content".to_string());
        return Err(
            JewelError::Upstream(format!("Gemini returned no text: {}", reason)).into(),
        );
    }

    tracing::debug!(
        "Gemini response: {} chars, finish_reason={:?}",
        text.len(),
        candidate.finish_reason
    );

    Ok(text)
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.send(self.build_request(&[], prompt)).await
    }

    async fn continue_chat(&self, history: &[ChatTurn], new_message: &str) -> Result<String> {
        self.send(self.build_request(history, new_message)).await
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}
