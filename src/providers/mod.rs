//! Model client module for Jewel
//!
//! This module contains the model client abstraction and the Gemini
//! implementation.

pub mod base;
pub mod gemini;

pub use base::ModelClient;
pub use gemini::GeminiClient;

use crate::config::ModelConfig;
use crate::error::Result;
use crate::prompts::generate_persona_prompt;
use std::sync::Arc;

/// Create the model client used by the handlers
///
/// The Jewel persona is installed as the system instruction.
///
/// # Arguments
///
/// * `config` - Model configuration
///
/// # Errors
///
/// Returns error if client initialization fails
pub fn create_client(config: &ModelConfig) -> Result<Arc<dyn ModelClient>> {
    let client = GeminiClient::new(config.clone(), Some(generate_persona_prompt()))?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_uses_configured_model() {
        let config = ModelConfig {
            model: "gemini-custom".to_string(),
            ..ModelConfig::default()
        };
        let client = create_client(&config).unwrap();
        assert_eq!(client.model_name(), "gemini-custom");
    }
}
