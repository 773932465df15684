//! End-to-end coverage of the highlight pipeline: configuration in,
//! painted spans out.

use proptest::prelude::*;
use ratatui::style::Color;
use wordlight::{
    paint_line, ColorDirective, HighlightConfig, HighlightController, HighlightRequest, RuleSet,
};

const FG: Color = Color::White;

#[test]
fn words_only_pipeline() {
    let mut controller = HighlightController::new(FG);
    controller.set_words(["END"]);

    let rules = controller.rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.rules()[0].pattern(), r"\b(?>END)\b");

    let spans = paint_line(&rules, "BEGIN END");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].range, 6..9);
    assert_eq!(
        spans[0].directive,
        ColorDirective::Background(Color::Rgb(0, 0, 255))
    );
}

#[test]
fn phrase_only_pipeline() {
    let mut controller = HighlightController::new(FG);
    controller.set_phrase(Some("TOTAL"));

    let rules = controller.rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.rules()[0].pattern(), "(TOTAL)");

    // No boundaries: the phrase matches inside a longer token too
    let spans = paint_line(&rules, "SUBTOTALS");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].range, 3..8);
    assert_eq!(
        spans[0].directive,
        ColorDirective::Background(Color::Rgb(255, 165, 0))
    );
}

#[test]
fn no_input_pipeline_keeps_foreground_rendering() {
    let controller = HighlightController::new(FG);
    let rules = controller.rules();
    assert_eq!(rules.rules()[0].pattern(), ".+");

    let spans = paint_line(&rules, "nothing highlighted");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].directive, ColorDirective::Foreground(FG));
}

#[test]
fn word_color_wins_where_rules_overlap() {
    let mut controller = HighlightController::new(FG);
    controller.set_words(["alpha"]);
    controller.set_phrase(Some("alpha beta"));

    let spans = paint_line(&controller.rules(), "alpha beta gamma");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].range, 0..5);
    assert_eq!(
        spans[0].directive,
        ColorDirective::Background(Color::Rgb(0, 0, 255))
    );
}

#[test]
fn render_pass_snapshot_survives_property_changes() {
    let mut controller = HighlightController::new(FG);
    controller.set_words(["in", "int"]);

    // A render pass pins the current set
    let snapshot = controller.rules();

    // The owning side keeps mutating
    controller.set_words(["unrelated"]);
    controller.set_phrase(Some("TOTAL"));

    // The pinned set still paints with the old inputs
    let spans = paint_line(&snapshot, "int x");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].range, 0..3);
}

#[test]
fn config_feeds_controller() {
    let config = HighlightConfig::from_json(
        r##"{"words": ["END"], "phrase": "TOTAL", "phrase_background": "#FFA500"}"##,
    )
    .unwrap();
    let controller = HighlightController::from_config(&config, FG);

    let rules = controller.rules();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.rules()[0].pattern(), r"\b(?>END)\b");
    assert_eq!(rules.rules()[1].pattern(), "(TOTAL)");
    assert_eq!(
        rules.rules()[1].directive(),
        ColorDirective::Background(Color::Rgb(255, 165, 0))
    );
}

proptest! {
    /// Every word in a set of alphanumeric-bounded literals is matchable
    /// as a whole token, regardless of what else is in the set.
    #[test]
    fn whole_word_matches_each_word(
        words in prop::collection::hash_set("[a-z]{2,8}", 1..6)
    ) {
        let words: Vec<String> = words.into_iter().collect();
        let request = HighlightRequest {
            words: words.clone(),
            ..Default::default()
        };
        let rules = RuleSet::compile(&request, FG).unwrap();

        for word in &words {
            let line = format!("- {} -", word);
            let spans = paint_line(&rules, &line);
            prop_assert_eq!(spans.len(), 1);
            prop_assert_eq!(spans[0].range.clone(), 2..2 + word.len());
        }
    }

    /// A word and a longer word it prefixes are both independently
    /// matchable (the descending-length sort keeps the atomic group from
    /// committing to the prefix).
    #[test]
    fn prefix_pairs_are_both_matchable(w in "[a-z]{2,6}", suffix in "[a-z]{1,4}") {
        let longer = format!("{}{}", w, suffix);
        let request = HighlightRequest {
            words: vec![w.clone(), longer.clone()],
            ..Default::default()
        };
        let rules = RuleSet::compile(&request, FG).unwrap();

        let spans = paint_line(&rules, &format!("{} x", w));
        prop_assert_eq!(spans.len(), 1);
        prop_assert_eq!(spans[0].range.clone(), 0..w.len());

        let spans = paint_line(&rules, &format!("{} x", longer));
        prop_assert_eq!(spans.len(), 1);
        prop_assert_eq!(spans[0].range.clone(), 0..longer.len());
    }
}
