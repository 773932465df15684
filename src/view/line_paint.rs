//! Applying a rule set to one rendered line.
//!
//! The render pass calls [`paint_line`] per visible line and paints the
//! returned spans. Overlap resolution is first-registered-wins: a match
//! from a later rule that overlaps a span already claimed by an earlier
//! rule is dropped, so the word-set color takes precedence over the
//! phrase color where both match.

use crate::primitives::highlight_types::HighlightSpan;
use crate::primitives::rules::RuleSet;
use std::ops::Range;

/// Apply each rule in order against `line`, returning the spans to paint
/// sorted by start offset.
pub fn paint_line(rules: &RuleSet, line: &str) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for rule in rules.rules() {
        for found in rule.regex().find_iter(line) {
            let m = match found {
                Ok(m) => m,
                // Backtracking limit exceeded; abandon this rule for the line
                Err(_) => break,
            };
            if m.start() == m.end() {
                continue;
            }
            let range = m.start()..m.end();
            if spans.iter().any(|s| overlaps(&s.range, &range)) {
                continue;
            }
            spans.push(HighlightSpan {
                range,
                directive: rule.directive(),
            });
        }
    }
    spans.sort_by_key(|s| s.range.start);
    spans
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
