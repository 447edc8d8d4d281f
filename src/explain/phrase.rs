//! Phrasing helpers shared by the per-command explanations

use crate::command::Command;
use crate::key::{Key, Part, PointKind};

use super::item::Span;

/// Format a coordinate value for display.
pub(crate) fn fmt_num(v: f64) -> String {
    format!("{v}")
}

pub(crate) fn fmt_flag(v: bool) -> &'static str {
    if v { "1" } else { "0" }
}

/// The pen-state prefix for the command at `i`, if any.
///
/// A moveto not preceded by another moveto picks the pen up; whatever
/// command follows a moveto puts it down again.
pub(crate) fn pen_phrase(commands: &[Command], i: usize) -> Option<&'static str> {
    let after_move = i
        .checked_sub(1)
        .and_then(|p| commands.get(p))
        .is_some_and(Command::is_move_to);
    if commands[i].is_move_to() && !after_move {
        Some("Pick up the pen and ")
    } else if after_move {
        Some("Put down the pen and ")
    } else {
        None
    }
}

/// Phrase a point as `{ x: …, y: … }` spans, each axis keyed to its part.
///
/// Under a relative command each axis reads as an offset from the previous
/// point; absolute commands, and radii even under relative commands, read as
/// the literal signed value.
pub(crate) fn push_point(
    spans: &mut Vec<Span>,
    index: usize,
    kind: PointKind,
    x: f64,
    y: f64,
    relative: bool,
) {
    let offset = relative && !kind.is_radius();
    spans.push(Span::plain("{"));
    spans.push(Span::keyed(
        Key::for_part(index, kind.x_part()),
        format!(" x: {}", axis_phrase(x, offset)),
    ));
    spans.push(Span::plain(","));
    spans.push(Span::keyed(
        Key::for_part(index, kind.y_part()),
        format!(" y: {} ", axis_phrase(y, offset)),
    ));
    spans.push(Span::plain("}"));
}

fn axis_phrase(v: f64, offset: bool) -> String {
    if offset {
        let sign = if v < 0.0 { '-' } else { '+' };
        format!("previous point {sign} {}", fmt_num(v.abs()))
    } else if v < 0.0 {
        format!("-{}", fmt_num(v.abs()))
    } else {
        fmt_num(v.abs())
    }
}

/// Phrase a relative displacement directionally: `right 5 and top 3`.
///
/// Zero or missing axes are skipped entirely; the joiner appears only when
/// both axes are present. This is the phrasing for simple moves and lines,
/// distinct from `push_point`'s "previous point ± N".
pub(crate) fn push_relative_point(
    spans: &mut Vec<Span>,
    index: usize,
    dx: Option<f64>,
    dy: Option<f64>,
) {
    let dx = dx.filter(|v| *v != 0.0);
    let dy = dy.filter(|v| *v != 0.0);

    if let Some(dx) = dx {
        let word = if dx < 0.0 { "left" } else { "right" };
        spans.push(Span::keyed(
            Key::for_part(index, Part::X),
            format!("{word} {}", fmt_num(dx.abs())),
        ));
    }
    if dx.is_some() && dy.is_some() {
        spans.push(Span::plain(" and "));
    }
    if let Some(dy) = dy {
        let word = if dy < 0.0 { "top" } else { "bottom" };
        spans.push(Span::keyed(
            Key::for_part(index, Part::Y),
            format!("{word} {}", fmt_num(dy.abs())),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn absolute_point_is_literal() {
        let mut spans = Vec::new();
        push_point(&mut spans, 2, PointKind::Destination, 5.0, -3.0, false);
        assert_eq!(text(&spans), "{ x: 5, y: -3 }");
    }

    #[test]
    fn relative_point_is_offset_from_previous() {
        let mut spans = Vec::new();
        push_point(&mut spans, 2, PointKind::Destination, 5.0, -3.0, true);
        assert_eq!(
            text(&spans),
            "{ x: previous point + 5, y: previous point - 3 }"
        );
    }

    #[test]
    fn radii_are_never_offsets() {
        let mut spans = Vec::new();
        push_point(&mut spans, 2, PointKind::Radius, 10.0, 10.0, true);
        assert_eq!(text(&spans), "{ x: 10, y: 10 }");
    }

    #[test]
    fn control_point_axes_get_their_own_keys() {
        let mut spans = Vec::new();
        push_point(&mut spans, 4, PointKind::StartControl, 1.0, 2.0, false);
        assert_eq!(
            spans[1].key,
            Some(Key::for_part(4, Part::Cp1X))
        );
        assert_eq!(
            spans[3].key,
            Some(Key::for_part(4, Part::Cp1Y))
        );
    }

    #[test]
    fn directional_phrase_joins_both_axes() {
        let mut spans = Vec::new();
        push_relative_point(&mut spans, 2, Some(5.0), Some(-3.0));
        assert_eq!(text(&spans), "right 5 and top 3");
    }

    #[test]
    fn directional_phrase_skips_zero_axes() {
        let mut spans = Vec::new();
        push_relative_point(&mut spans, 2, Some(-4.0), Some(0.0));
        assert_eq!(text(&spans), "left 4");

        let mut spans = Vec::new();
        push_relative_point(&mut spans, 2, None, Some(2.0));
        assert_eq!(text(&spans), "bottom 2");
    }

    #[test]
    fn pen_phrases_around_moves() {
        let commands = vec![
            Command::MoveTo {
                x: 0.0,
                y: 0.0,
                relative: false,
            },
            Command::LineTo {
                x: 1.0,
                y: 1.0,
                relative: false,
            },
            Command::LineTo {
                x: 2.0,
                y: 2.0,
                relative: false,
            },
        ];
        assert_eq!(pen_phrase(&commands, 0), Some("Pick up the pen and "));
        assert_eq!(pen_phrase(&commands, 1), Some("Put down the pen and "));
        assert_eq!(pen_phrase(&commands, 2), None);
    }

    #[test]
    fn move_after_move_puts_the_pen_down() {
        let commands = vec![
            Command::MoveTo {
                x: 0.0,
                y: 0.0,
                relative: false,
            },
            Command::MoveTo {
                x: 5.0,
                y: 5.0,
                relative: false,
            },
        ];
        assert_eq!(pen_phrase(&commands, 1), Some("Put down the pen and "));
    }
}
