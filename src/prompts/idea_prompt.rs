//! Idea generation prompt
//!
//! Turns a track and a prize selection into the single-turn instruction sent
//! to the model, plus the short summary recorded in the session history.

use crate::catalog::Catalog;
use crate::error::{JewelError, Result};
use crate::prompts::persona::{ASSISTANT_NAME, RESOURCES_URL};

/// Error message returned when the selection is incomplete
pub const MISSING_SELECTION_MESSAGE: &str =
    "Please select a track and at least one prize category.";

/// A constructed idea-generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaPrompt {
    /// Full instruction sent to the model
    pub prompt: String,
    /// User turn recorded in the conversation history
    pub summary: String,
}

/// Builds the idea-generation prompt for a track and prize selection
///
/// Prize names that are not in the catalog are silently dropped. The summary
/// lists the names exactly as the client sent them.
///
/// # Arguments
///
/// * `catalog` - Reference data used to resolve prize names
/// * `track` - Selected track name
/// * `prizes` - Selected prize names, in client order
///
/// # Errors
///
/// Returns `JewelError::InvalidRequest` if the track is blank or no prize
/// was selected.
///
/// # Examples
///
/// ```
/// use jewel::catalog::Catalog;
/// use jewel::prompts::build_idea_prompt;
///
/// # fn main() -> anyhow::Result<()> {
/// let catalog = Catalog::mlh();
/// let idea = build_idea_prompt(
///     &catalog,
///     "General Track",
///     &["Best Use of Gemini API".to_string()],
/// )?;
/// assert!(idea.prompt.contains("\"General Track\""));
/// assert!(idea.prompt.contains("https://hack.mlh.io"));
/// # Ok(())
/// # }
/// ```
pub fn build_idea_prompt(catalog: &Catalog, track: &str, prizes: &[String]) -> Result<IdeaPrompt> {
    let track = track.trim();
    if track.is_empty() || prizes.is_empty() {
        return Err(JewelError::InvalidRequest(MISSING_SELECTION_MESSAGE.to_string()).into());
    }

    let resolved = catalog.resolve_prizes(prizes);
    if resolved.len() < prizes.len() {
        tracing::debug!(
            selected = prizes.len(),
            resolved = resolved.len(),
            "Dropped prize names not found in catalog"
        );
    }

    let prize_names = resolved
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let prompt = format!(
        r#"As {name}, an elite hackathon strategist and judge, generate a project idea for a hackathon team.
The team has selected the following track: "{track}".
They are aiming for the following prize categories: {prize_names}.

For each selected prize, explain how the project idea leverages the prize's associated technology and how it is relevant to the selected track.
Focus on technology learning and exploration.
Keep the response concise and mentor-like.
Each project idea should use technologies associated with each selected prize, with an explanation of how it is relevant to each track and prize category.
Direct users to {url} for any questions on resources."#,
        name = ASSISTANT_NAME,
        url = RESOURCES_URL,
    );

    let summary = format!(
        "Generate an idea for track: {}, prizes: {}",
        track,
        prizes.join(", ")
    );

    Ok(IdeaPrompt { prompt, summary })
}
