//! Alternation pattern construction from literal strings.
//!
//! Turns a collection of literals into one case-insensitive pattern that
//! matches any of them, optionally bounded as whole words.
//!
//! # Design
//!
//! Two emission paths, classified once over the whole collection:
//!
//! - **Fast path** (whole-word requested and every literal starts and ends
//!   with an alphanumeric character): literals sorted by descending length,
//!   joined inside an atomic group, wrapped in `\b` assertions. The atomic
//!   group avoids catastrophic backtracking but commits to the first
//!   alternative that matches a prefix, so `\b(?>in|int)\b` can never match
//!   `int` — hence the mandatory descending-length sort.
//! - **Fallback path** (anything else, e.g. a literal like `.maxstack`):
//!   plain group, with `\b` emitted per literal only next to an edge that is
//!   actually alphanumeric. A boundary assertion adjacent to punctuation
//!   would reject matches it should accept.
//!
//! Whitespace inside a literal becomes a separator wildcard, so the literal
//! `foo bar` also matches `foo_bar` and `foo   bar`.

use fancy_regex::Regex;
use thiserror::Error;

/// Wildcard substituted for whitespace inside a literal: zero or more
/// non-word characters or underscores.
pub const SEPARATOR_WILDCARD: &str = r"([^\w]|[_])*";

/// Precondition violations in pattern input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The literal collection was empty
    #[error("cannot build a pattern from an empty literal collection")]
    NoLiterals,
    /// A literal was the empty string
    #[error("zero-length literal in pattern input")]
    EmptyLiteral,
}

/// A literal is simple when both its first and last characters are
/// alphanumeric, i.e. `\b` is valid at both edges.
fn is_simple(literal: &str) -> bool {
    let first = literal.chars().next();
    let last = literal.chars().next_back();
    matches!((first, last), (Some(f), Some(l)) if f.is_alphanumeric() && l.is_alphanumeric())
}

/// Escape a literal for verbatim matching, substituting the separator
/// wildcard for whitespace.
fn escape_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() * 2);
    let mut buf = [0u8; 4];
    for ch in literal.chars() {
        if ch.is_whitespace() {
            out.push_str(SEPARATOR_WILDCARD);
        } else {
            out.push_str(&fancy_regex::escape(ch.encode_utf8(&mut buf)));
        }
    }
    out
}

/// Build one alternation pattern matching any of `literals`.
///
/// With `whole_word` set, matches must be bounded by non-word characters.
/// Returns an error if the collection is empty or contains a zero-length
/// literal; callers are expected to filter blank entries upstream.
pub fn alternation_pattern<S: AsRef<str>>(
    literals: &[S],
    whole_word: bool,
) -> Result<String, PatternError> {
    if literals.is_empty() {
        return Err(PatternError::NoLiterals);
    }
    if literals.iter().any(|l| l.as_ref().is_empty()) {
        return Err(PatternError::EmptyLiteral);
    }

    let mut pattern = String::new();
    if whole_word && literals.iter().all(|l| is_simple(l.as_ref())) {
        // Longest first; a stable sort keeps the original relative order
        // for equal lengths. A shorter literal that prefixes a longer one
        // must be tried after it inside the atomic group.
        let mut ordered: Vec<&str> = literals.iter().map(AsRef::as_ref).collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        pattern.push_str(r"\b(?>");
        for (i, literal) in ordered.iter().enumerate() {
            if i > 0 {
                pattern.push('|');
            }
            pattern.push_str(&escape_literal(literal));
        }
        pattern.push_str(r")\b");
    } else {
        pattern.push('(');
        for (i, literal) in literals.iter().enumerate() {
            let literal = literal.as_ref();
            if i > 0 {
                pattern.push('|');
            }
            if whole_word && literal.chars().next().is_some_and(char::is_alphanumeric) {
                pattern.push_str(r"\b");
            }
            pattern.push_str(&escape_literal(literal));
            if whole_word && literal.chars().next_back().is_some_and(char::is_alphanumeric) {
                pattern.push_str(r"\b");
            }
        }
        pattern.push(')');
    }
    Ok(pattern)
}

/// Compile a pattern case-insensitively (Unicode semantics).
pub fn compile(pattern: &str) -> Result<Regex, fancy_regex::Error> {
    fancy_regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
}
