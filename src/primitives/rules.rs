//! Highlight rule compilation.
//!
//! Assembles an ordered [`RuleSet`] from a [`HighlightRequest`]: a
//! whole-word rule over the word set, then a free rule over the phrase,
//! each painting a background. When both inputs are blank a single
//! foreground-only rule matching whole lines is produced instead, so
//! unhighlighted rendering still flows through the same mechanism.
//!
//! Rule sets are rebuilt wholesale on any input change and never mutated
//! in place. Compilation is deterministic: the same request always yields
//! a structurally identical set.

use crate::primitives::highlight_types::{
    ColorDirective, DEFAULT_PHRASE_BACKGROUND, DEFAULT_WORDS_BACKGROUND,
};
use crate::primitives::pattern::{self, PatternError};
use fancy_regex::Regex;
use ratatui::style::Color;
use thiserror::Error;

/// Rule compilation failure.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Invalid literal input (precondition violation by the caller)
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// An emitted pattern failed to compile. Escaping makes this
    /// unreachable for valid literals; treat as a programming error.
    #[error("highlight pattern failed to compile: {0}")]
    Compile(#[from] fancy_regex::Error),
}

/// The inputs a rule set is compiled from.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightRequest {
    /// Literal words, matched whole-word
    pub words: Vec<String>,
    /// One literal phrase, matched anywhere
    pub phrase: Option<String>,
    /// Background for word matches
    pub words_background: Color,
    /// Background for phrase matches
    pub phrase_background: Color,
}

impl Default for HighlightRequest {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            phrase: None,
            words_background: DEFAULT_WORDS_BACKGROUND,
            phrase_background: DEFAULT_PHRASE_BACKGROUND,
        }
    }
}

impl HighlightRequest {
    /// The phrase, if present and not blank
    fn phrase_text(&self) -> Option<&str> {
        self.phrase.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// One compiled pattern paired with its color directive.
///
/// Immutable once built and exclusively owned by its rule set.
#[derive(Debug)]
pub struct CompiledRule {
    pattern: String,
    regex: Regex,
    directive: ColorDirective,
}

impl CompiledRule {
    fn new(pattern: String, directive: ColorDirective) -> Result<Self, RuleError> {
        let regex = pattern::compile(&pattern)?;
        Ok(Self {
            pattern,
            regex,
            directive,
        })
    }

    /// The pattern text this rule was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled case-insensitive regex
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// How matches of this rule are painted
    pub fn directive(&self) -> ColorDirective {
        self.directive
    }
}

/// Ordered collection of compiled rules, applied in order per line.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile a rule set from a request.
    ///
    /// `foreground` is the host editor's current foreground color, used
    /// only by the fallback rule when both words and phrase are blank.
    pub fn compile(request: &HighlightRequest, foreground: Color) -> Result<Self, RuleError> {
        let phrase = request.phrase_text();
        if request.words.is_empty() && phrase.is_none() {
            let rule = CompiledRule::new(".+".to_string(), ColorDirective::Foreground(foreground))?;
            return Ok(Self { rules: vec![rule] });
        }

        // Words first: on overlap the word-set color wins (first-registered
        // rule takes precedence at paint time).
        let mut rules = Vec::with_capacity(2);
        if !request.words.is_empty() {
            let pattern = pattern::alternation_pattern(&request.words, true)?;
            rules.push(CompiledRule::new(
                pattern,
                ColorDirective::Background(request.words_background),
            )?);
        }
        if let Some(phrase) = phrase {
            let pattern = pattern::alternation_pattern(&[phrase], false)?;
            rules.push(CompiledRule::new(
                pattern,
                ColorDirective::Background(request.phrase_background),
            )?);
        }
        Ok(Self { rules })
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// A compiled set always holds at least the fallback rule
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
