//! Base model client trait
//!
//! This module defines the `ModelClient` trait that every generative-text
//! backend implements. Handlers depend only on this trait, which keeps the
//! hosted API an opaque collaborator and lets tests substitute a scripted
//! client.

use crate::error::Result;
use crate::history::ChatTurn;
use async_trait::async_trait;

/// Generative-text backend used by the request handlers
///
/// Implementations must report every failure (transport, authentication,
/// quota, model-side refusal) as `JewelError::Upstream` carrying a
/// human-readable message. Callers do not retry and surface that message
/// verbatim.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Generates text for a single stateless prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full instruction text
    ///
    /// # Returns
    ///
    /// Returns the model's raw (markdown) response text
    ///
    /// # Errors
    ///
    /// Returns `JewelError::Upstream` if the call fails for any reason
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Continues a conversation with a new user message
    ///
    /// # Arguments
    ///
    /// * `history` - Prior turns, oldest first, replayed verbatim
    /// * `new_message` - The user's new message
    ///
    /// # Returns
    ///
    /// Returns the model's raw (markdown) reply
    ///
    /// # Errors
    ///
    /// Returns `JewelError::Upstream` if the call fails for any reason
    async fn continue_chat(&self, history: &[ChatTurn], new_message: &str) -> Result<String>;

    /// Name of the model requests are sent to
    fn model_name(&self) -> String;
}
