//! End-to-end tests: parse a path string, explain it, and drive the hover
//! and scroll surfaces the way a hosting view would.

use pathprose::{
    Explanation, Highlight, HoverState, Key, Part, ScrollSink, explain_path,
};

fn prose_text(explanation: &Explanation, index: usize) -> String {
    explanation.items[index]
        .prose
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records every scroll request it receives.
#[derive(Default)]
struct RecordingSink {
    scrolled: Vec<String>,
}

impl ScrollSink for RecordingSink {
    fn scroll_into_view(&mut self, key: &Key) {
        self.scrolled.push(key.as_str().to_string());
    }
}

#[test]
fn code_and_prose_views_share_keys() {
    let explanation = explain_path("M 0 0 L 1 1 C 1 2 3 4 5 6").unwrap();
    let cubic = &explanation.items[2];

    let cp1x = Key::for_part(2, Part::Cp1X);
    let in_code = cubic.code.iter().any(|s| s.key.as_ref() == Some(&cp1x));
    let in_prose = cubic
        .prose
        .iter()
        .flat_map(|p| p.spans.iter())
        .any(|s| s.key.as_ref() == Some(&cp1x));
    assert!(in_code, "cp1 x should be a code token");
    assert!(in_prose, "cp1 x should be a prose token");
}

#[test]
fn explanation_is_deterministic() {
    let source = "M 10 10 c 20 20 40 20 50 10 a 25 25 -30 0 1 50 -25 z";
    assert_eq!(explain_path(source).unwrap(), explain_path(source).unwrap());
}

#[test]
fn keys_never_collide_across_the_sequence() {
    let explanation =
        explain_path("M 0 0 L 1 1 H 2 V 3 C 1 2 3 4 5 6 S 7 8 9 10 Q 1 2 3 4 T 5 6 A 1 1 0 0 1 2 2 Z")
            .unwrap();

    // Within one item, a key may legitimately appear on several spans (the
    // separators all carry the command key); across items, never.
    let mut per_item: Vec<std::collections::HashSet<&str>> = Vec::new();
    for item in &explanation.items {
        let keys: std::collections::HashSet<&str> = item
            .code
            .iter()
            .chain(item.prose.iter().flat_map(|p| p.spans.iter()))
            .filter_map(|s| s.key.as_ref())
            .map(Key::as_str)
            .collect();
        for earlier in &per_item {
            assert!(earlier.is_disjoint(&keys));
        }
        per_item.push(keys);
    }
}

#[test]
fn hovering_a_command_crosses_both_views() {
    let explanation = explain_path("M 0 0 L 1 1 C 1 2 3 4 5 6 Z").unwrap();
    let mut hover = HoverState::new();

    // Pointer enters the whole-command token for the cubic.
    hover.on_hover_enter(explanation.items[2].key.clone());

    for span in explanation.items[2]
        .code
        .iter()
        .chain(explanation.items[2].prose.iter().flat_map(|p| p.spans.iter()))
    {
        if let Some(key) = &span.key {
            assert_eq!(hover.is_highlighted(key), Highlight::Primary);
        }
    }
    // Nothing in the neighboring line lights up.
    for span in &explanation.items[1].code {
        if let Some(key) = &span.key {
            assert_eq!(hover.is_highlighted(key), Highlight::None);
        }
    }
}

#[test]
fn hovering_a_fine_token_marks_its_ancestors_secondary() {
    let explanation = explain_path("M 0 0 L 1 1 L 2 2 L 3 3").unwrap();
    let mut hover = HoverState::new();
    hover.on_hover_enter(Key::for_part(3, Part::X));

    assert_eq!(
        hover.is_highlighted(&explanation.items[3].key),
        Highlight::Secondary
    );
    assert_eq!(
        hover.is_highlighted(&Key::for_part(3, Part::X)),
        Highlight::Primary
    );
    assert_eq!(
        hover.is_highlighted(&Key::for_part(3, Part::Y)),
        Highlight::None
    );
}

#[test]
fn primary_and_secondary_are_mutually_exclusive() {
    let explanation =
        explain_path("M 0 0 C 1 2 3 4 5 6 A 1 1 0 0 1 2 2").unwrap();
    let all_keys: Vec<Key> = explanation
        .items
        .iter()
        .flat_map(|item| {
            item.code
                .iter()
                .chain(item.prose.iter().flat_map(|p| p.spans.iter()))
        })
        .filter_map(|s| s.key.clone())
        .collect();

    let mut hover = HoverState::new();
    for hovered in &all_keys {
        hover.set_hovering(Some(hovered.clone()));
        for candidate in &all_keys {
            let downward =
                candidate == hovered || candidate.is_descendant_of(hovered);
            let upward = hovered.is_descendant_of(candidate);
            assert!(
                !(downward && upward),
                "{candidate} cannot be both above and below {hovered}"
            );
            let expected = if downward {
                Highlight::Primary
            } else if upward {
                Highlight::Secondary
            } else {
                Highlight::None
            };
            assert_eq!(hover.is_highlighted(candidate), expected);
        }
    }
}

#[test]
fn scroll_to_reaches_rendered_keys_only() {
    let explanation = explain_path("M 0 0 L 5 -3").unwrap();
    let mut sink = RecordingSink::default();

    assert!(explanation.scroll_to(&Key::for_command(1), &mut sink));
    assert!(explanation.scroll_to(&Key::for_part(1, Part::Y), &mut sink));
    // A quadratic control point was never rendered for a line.
    assert!(!explanation.scroll_to(&Key::for_part(1, Part::Cp), &mut sink));
    assert!(!explanation.scroll_to(&Key::for_command(7), &mut sink));

    assert_eq!(sink.scrolled, vec!["1".to_string(), "1-y".to_string()]);
}

#[test]
fn subpath_boundaries_phrase_the_pen() {
    let explanation = explain_path("M 0 0 L 1 1 M 5 5 L 6 6").unwrap();
    assert!(prose_text(&explanation, 0).starts_with("Pick up the pen and "));
    assert!(prose_text(&explanation, 1).starts_with("Put down the pen and "));
    assert!(prose_text(&explanation, 2).starts_with("Pick up the pen and "));
    assert!(prose_text(&explanation, 3).starts_with("Put down the pen and "));
}

#[test]
fn degenerate_values_render_as_literal_text() {
    let explanation = explain_path("M 0 0 A 0 0 0 0 0 0 0").unwrap();
    let text = prose_text(&explanation, 1);
    assert!(text.contains("{ x: 0, y: 0 }"), "{text}");
    assert!(text.contains("no rotation"), "{text}");
    assert!(text.contains("lesser than 180 degrees"), "{text}");
}
