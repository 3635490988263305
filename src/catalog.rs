//! Static hackathon reference data
//!
//! Tracks and MLH prize categories are loaded once at startup and shared
//! read-only by every request handler.

use serde::{Deserialize, Serialize};

/// A sponsor-defined award with an associated technology requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeCategory {
    /// Category name as shown to users (e.g. "Best Use of Gemini API")
    pub name: String,
    /// The physical or other prize awarded
    pub prize: String,
    /// What a project must do to qualify
    pub description: String,
}

impl PrizeCategory {
    /// Creates a new prize category
    ///
    /// # Examples
    ///
    /// ```
    /// use jewel::catalog::PrizeCategory;
    ///
    /// let prize = PrizeCategory::new("Best Hack", "Stickers", "Build anything.");
    /// assert_eq!(prize.name, "Best Hack");
    /// ```
    pub fn new(
        name: impl Into<String>,
        prize: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prize: prize.into(),
            description: description.into(),
        }
    }
}

/// Immutable collection of tracks and prize categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    tracks: Vec<String>,
    prizes: Vec<PrizeCategory>,
}

impl Catalog {
    /// Creates a catalog from explicit tracks and prizes
    pub fn new(tracks: Vec<String>, prizes: Vec<PrizeCategory>) -> Self {
        Self { tracks, prizes }
    }

    /// Returns the built-in MLH catalog
    ///
    /// # Examples
    ///
    /// ```
    /// use jewel::catalog::Catalog;
    ///
    /// let catalog = Catalog::mlh();
    /// assert!(catalog.tracks().iter().any(|t| t == "General Track"));
    /// assert_eq!(catalog.prizes().len(), 7);
    /// ```
    pub fn mlh() -> Self {
        Self {
            tracks: vec!["General Track".to_string()],
            prizes: vec![
                PrizeCategory::new(
                    "Best Use of Gemini API",
                    "Mechanical Keyboards",
                    "Build AI-powered apps using the Google Gemini API.",
                ),
                PrizeCategory::new(
                    "Best Use of ElevenLabs",
                    "Beats Wireless Earbuds",
                    "Use the ElevenLabs API to deploy natural-sounding audio in your project.",
                ),
                PrizeCategory::new(
                    "Best Use of AI powered by Reach Capital",
                    "Logitech Webcam & a Meeting with Reach Capital Investors",
                    "Build a project using AI to transform the future of learning, health, or work.",
                ),
                PrizeCategory::new(
                    "Best Use of Solana",
                    "M5Stack Development Kit",
                    "Build an innovative project that harnesses Solana's speed and low cost.",
                ),
                PrizeCategory::new(
                    "Best Use of Snowflake",
                    "Arduino Tiny Machine Learning Kit",
                    "Integrate industry-leading Large Language Models (LLMs) into your application using Snowflake's REST API.",
                ),
                PrizeCategory::new(
                    "Best Use of Vultr Cloud",
                    "Portable Screens",
                    "Utilize Vultr's services in the most in-depth way, leveraging advanced features like managed Kubernetes or bare metal GPUs.",
                ),
                PrizeCategory::new(
                    "Best .Tech Domain Name",
                    "Blue Snowball Microphone & a Free .Tech Domain for up to 10 years (including free annual renewals)",
                    "Register a creative and clever .Tech domain for your project.",
                ),
            ],
        }
    }

    /// All track names
    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    /// All prize categories, in catalog order
    pub fn prizes(&self) -> &[PrizeCategory] {
        &self.prizes
    }

    /// Resolves selected prize names against the catalog
    ///
    /// Names that do not match a category are dropped. The result follows
    /// catalog order, not selection order, and contains each category once.
    ///
    /// # Examples
    ///
    /// ```
    /// use jewel::catalog::Catalog;
    ///
    /// let catalog = Catalog::mlh();
    /// let selected = vec!["Best Use of Solana".to_string(), "Nope".to_string()];
    /// let resolved = catalog.resolve_prizes(&selected);
    /// assert_eq!(resolved.len(), 1);
    /// assert_eq!(resolved[0].name, "Best Use of Solana");
    /// ```
    pub fn resolve_prizes(&self, selected: &[String]) -> Vec<&PrizeCategory> {
        self.prizes
            .iter()
            .filter(|p| selected.iter().any(|s| s == &p.name))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mlh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlh_catalog_contents() {
        let catalog = Catalog::mlh();
        assert_eq!(catalog.tracks(), &["General Track".to_string()]);
        assert_eq!(catalog.prizes().len(), 7);
        assert_eq!(catalog.prizes()[0].name, "Best Use of Gemini API");
        assert_eq!(catalog.prizes()[0].prize, "Mechanical Keyboards");
    }

    #[test]
    fn test_resolve_prizes_drops_unknown_names() {
        let catalog = Catalog::mlh();
        let selected = vec!["Unknown".to_string(), "Also unknown".to_string()];
        assert!(catalog.resolve_prizes(&selected).is_empty());
    }

    #[test]
    fn test_resolve_prizes_uses_catalog_order() {
        let catalog = Catalog::mlh();
        let selected = vec![
            "Best Use of Vultr Cloud".to_string(),
            "Best Use of Gemini API".to_string(),
        ];
        let names: Vec<&str> = catalog
            .resolve_prizes(&selected)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Best Use of Gemini API", "Best Use of Vultr Cloud"]);
    }

    #[test]
    fn test_resolve_prizes_ignores_duplicates() {
        let catalog = Catalog::mlh();
        let selected = vec![
            "Best Use of Solana".to_string(),
            "Best Use of Solana".to_string(),
        ];
        assert_eq!(catalog.resolve_prizes(&selected).len(), 1);
    }

    #[test]
    fn test_catalog_serializes_prize_fields() {
        let json = serde_json::to_value(Catalog::mlh()).unwrap();
        let first = &json["prizes"][0];
        assert_eq!(first["name"], "Best Use of Gemini API");
        assert!(first["description"].as_str().unwrap().contains("Gemini"));
    }
}
