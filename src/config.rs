//! Highlight configuration.
//!
//! Serde-backed settings for the highlight inputs, with the widget's
//! stock colors as defaults. Colors use ratatui's string forms, so JSON
//! like `"#0000FF"` or `"blue"` both work.

use crate::primitives::highlight_types::{DEFAULT_PHRASE_BACKGROUND, DEFAULT_WORDS_BACKGROUND};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Highlight settings as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Literal words to highlight whole-word
    pub words: Vec<String>,
    /// One literal phrase to highlight anywhere
    pub phrase: Option<String>,
    /// Background for word matches
    pub words_background: Color,
    /// Background for phrase matches
    pub phrase_background: Color,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            phrase: None,
            words_background: DEFAULT_WORDS_BACKGROUND,
            phrase_background: DEFAULT_PHRASE_BACKGROUND,
        }
    }
}

impl HighlightConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
