//! Highlight property plumbing.
//!
//! [`HighlightController`] owns the four highlight inputs (word set,
//! phrase, and their backgrounds) plus the foreground inherited from the
//! host editor. Every setter synchronously recompiles the rule set and
//! republishes it as an atomic `Arc` swap — the published `Arc<RuleSet>`
//! is the host's "current highlighting definition" slot. A render pass
//! holding a clone keeps reading the previous, immutable set; the swap
//! never mutates a set in place.
//!
//! Setters are the trust boundary for literal input: blank word entries
//! are filtered here, upstream of the pattern builder's zero-length
//! precondition, so a rebuild cannot fail through this API.

use crate::config::HighlightConfig;
use crate::primitives::rules::{HighlightRequest, RuleSet};
use ratatui::style::Color;
use std::sync::Arc;

/// Per-instance owner of highlight settings and the published rule set.
#[derive(Debug)]
pub struct HighlightController {
    request: HighlightRequest,
    foreground: Color,
    published: Arc<RuleSet>,
}

impl HighlightController {
    /// Create a controller with no highlight inputs.
    ///
    /// `foreground` is the host's current foreground color; until words or
    /// a phrase are set, the published set holds only the foreground
    /// fallback rule.
    pub fn new(foreground: Color) -> Self {
        let request = HighlightRequest::default();
        let published = Arc::new(compile(&request, foreground));
        Self {
            request,
            foreground,
            published,
        }
    }

    /// Create a controller from a config snapshot.
    pub fn from_config(config: &HighlightConfig, foreground: Color) -> Self {
        let mut controller = Self::new(foreground);
        controller.request.words_background = config.words_background;
        controller.request.phrase_background = config.phrase_background;
        controller.request.phrase = config.phrase.clone();
        controller.set_words(config.words.iter().cloned());
        controller
    }

    /// Replace the word set. Blank entries are dropped.
    pub fn set_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.words = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.trim().is_empty())
            .collect();
        self.rebuild();
    }

    /// Replace the phrase. Blank phrases count as absent.
    pub fn set_phrase<S: Into<String>>(&mut self, phrase: Option<S>) {
        self.request.phrase = phrase.map(Into::into);
        self.rebuild();
    }

    /// Change the background used for word matches.
    pub fn set_words_background(&mut self, color: Color) {
        self.request.words_background = color;
        self.rebuild();
    }

    /// Change the background used for phrase matches.
    pub fn set_phrase_background(&mut self, color: Color) {
        self.request.phrase_background = color;
        self.rebuild();
    }

    /// Change the inherited foreground used by the fallback rule.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
        self.rebuild();
    }

    /// The currently published rule set.
    ///
    /// Cloning the `Arc` pins the snapshot: later setter calls publish a
    /// new set without touching this one.
    pub fn rules(&self) -> Arc<RuleSet> {
        Arc::clone(&self.published)
    }

    fn rebuild(&mut self) {
        let rules = compile(&self.request, self.foreground);
        tracing::debug!(
            rules = rules.len(),
            words = self.request.words.len(),
            "republished highlight rule set"
        );
        self.published = Arc::new(rules);
    }
}

/// Setters filter blank literals, so compilation cannot fail here; a
/// failure means the escaping discipline is broken.
fn compile(request: &HighlightRequest, foreground: Color) -> RuleSet {
    RuleSet::compile(request, foreground)
        .expect("escaped literals always compile to valid patterns")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::highlight_types::ColorDirective;

    const FG: Color = Color::White;

    #[test]
    fn test_starts_with_foreground_fallback() {
        let controller = HighlightController::new(FG);
        let rules = controller.rules();
        assert_eq!(rules.rules()[0].pattern(), ".+");
        assert_eq!(
            rules.rules()[0].directive(),
            ColorDirective::Foreground(FG)
        );
    }

    #[test]
    fn test_setter_republishes_new_set() {
        let mut controller = HighlightController::new(FG);
        let before = controller.rules();
        controller.set_words(["END"]);
        let after = controller.rules();
        assert!(!Arc::ptr_eq(&before, &after));
        // The pinned snapshot is unchanged
        assert_eq!(before.rules()[0].pattern(), ".+");
        assert_eq!(after.rules()[0].pattern(), r"\b(?>END)\b");
    }

    #[test]
    fn test_blank_words_are_filtered() {
        let mut controller = HighlightController::new(FG);
        controller.set_words(["", "   ", "END"]);
        assert_eq!(controller.rules().rules()[0].pattern(), r"\b(?>END)\b");
    }

    #[test]
    fn test_clearing_inputs_restores_fallback() {
        let mut controller = HighlightController::new(FG);
        controller.set_words(["END"]);
        controller.set_phrase(Some("TOTAL"));
        controller.set_words(std::iter::empty::<String>());
        controller.set_phrase(None::<String>);
        assert_eq!(controller.rules().rules()[0].pattern(), ".+");
    }

    #[test]
    fn test_background_change_recolors_rules() {
        let mut controller = HighlightController::new(FG);
        controller.set_words(["END"]);
        controller.set_words_background(Color::Green);
        assert_eq!(
            controller.rules().rules()[0].directive(),
            ColorDirective::Background(Color::Green)
        );
    }

    #[test]
    fn test_foreground_change_reaches_fallback_rule() {
        let mut controller = HighlightController::new(FG);
        controller.set_foreground(Color::Gray);
        assert_eq!(
            controller.rules().rules()[0].directive(),
            ColorDirective::Foreground(Color::Gray)
        );
    }
}
