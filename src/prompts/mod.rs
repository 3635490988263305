//! Prompts sent to the model
//!
//! This module provides the Jewel persona used as the model's system
//! instruction and the idea-generation prompt template.

pub mod idea_prompt;
pub mod persona;

pub use idea_prompt::{build_idea_prompt, IdeaPrompt, MISSING_SELECTION_MESSAGE};
pub use persona::generate_persona_prompt;
