//! Common highlighting types shared by rule compilation and rendering.

use ratatui::style::Color;
use std::ops::Range;

/// Default background for the word-set rule (translucent blue in the
/// original widget; terminals have no alpha channel)
pub const DEFAULT_WORDS_BACKGROUND: Color = Color::Rgb(0, 0, 255);

/// Default background for the phrase rule (orange)
pub const DEFAULT_PHRASE_BACKGROUND: Color = Color::Rgb(255, 165, 0);

/// How a matched span is painted.
///
/// Real highlight rules fill the background; the no-input fallback rule
/// instead re-applies the host's foreground so unhighlighted text renders
/// unchanged while still flowing through the same rule mechanism.
///
/// `Color` is `Copy`, so the color stored here is a snapshot taken at
/// compile time: later mutation of the caller's value cannot reach a
/// published rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDirective {
    /// Fill the matched span's background
    Background(Color),
    /// Recolor the matched span's text
    Foreground(Color),
}

impl ColorDirective {
    /// The color carried by this directive, regardless of layer
    pub fn color(&self) -> Color {
        match *self {
            ColorDirective::Background(c) | ColorDirective::Foreground(c) => c,
        }
    }
}

/// A highlighted span of text within one rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Byte range in the line
    pub range: Range<usize>,
    /// How to paint it
    pub directive: ColorDirective,
}
