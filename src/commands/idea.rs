//! `jewel idea`: generate a single idea from the terminal

use crate::catalog::Catalog;
use crate::error::Result;
use crate::prompts::build_idea_prompt;
use crate::providers::ModelClient;
use crate::render::render_markdown;

/// Generates one idea and returns the text to print
///
/// Uses the same prompt as the web endpoint, without any session history.
///
/// # Arguments
///
/// * `client` - Model client to call
/// * `catalog` - Reference data for prize resolution
/// * `track` - Selected track
/// * `prizes` - Selected prize names
/// * `html` - Render the markdown reply to HTML
///
/// # Errors
///
/// Returns error if the selection is invalid or the model call fails
pub async fn generate_idea(
    client: &dyn ModelClient,
    catalog: &Catalog,
    track: &str,
    prizes: &[String],
    html: bool,
) -> Result<String> {
    let idea = build_idea_prompt(catalog, track, prizes)?;
    tracing::info!(
        "Generating idea with {} for track {:?}",
        client.model_name(),
        track
    );

    let markdown = client.generate(&idea.prompt).await?;
    Ok(if html {
        render_markdown(&markdown)
    } else {
        markdown
    })
}
