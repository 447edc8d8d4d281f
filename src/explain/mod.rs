//! Command-to-prose explanation engine
//!
//! This module is organized into submodules:
//! - `item`: rendered output types (spans, paragraphs, explanation items)
//! - `phrase`: phrasing helpers shared across command variants
//!
//! The engine walks the command sequence once and emits, per command, the
//! code-token spans and the prose paragraphs for the two-pane view. The
//! match over `Command` is the single dispatch point: adding a command
//! variant fails to compile until it is explained here.

pub mod item;
mod phrase;

pub use item::{Explanation, ExplanationItem, HelpTopic, Paragraph, Span};

use crate::command::{Command, PathData};
use crate::key::{Key, Part, PointKind};

use phrase::{fmt_flag, fmt_num, pen_phrase, push_point, push_relative_point};

/// Prose for an implicit control point. The engine narrates the reflection
/// rule; computing the reflected point is the renderer's job, not ours.
const REFLECTION: &str =
    "the reflection of the end control point of the previous curve command";

/// Explain every command of a parsed path.
pub fn explain(path: &PathData) -> Explanation {
    let commands = &path.commands;
    let items = commands
        .iter()
        .enumerate()
        .map(|(i, c)| explain_command(commands, i, c))
        .collect();
    crate::log::debug!("explained {} commands", commands.len());
    Explanation { items }
}

/// The command letter span that opens every code rendering.
fn push_letter(code: &mut Vec<Span>, i: usize, c: &Command) {
    code.push(Span::keyed(
        Key::for_part(i, Part::Command),
        format!("{} ", c.letter()),
    ));
}

/// A `x,y` coordinate pair in the code view. The separator comma carries the
/// pair's group key (or the whole-command key for the destination), so that
/// hovering it behaves like hovering the pair.
fn push_code_pair(code: &mut Vec<Span>, i: usize, kind: PointKind, x: f64, y: f64) {
    let sep = match kind.group() {
        Some(part) => Key::for_part(i, part),
        None => Key::for_command(i),
    };
    code.push(Span::keyed(Key::for_part(i, kind.x_part()), fmt_num(x)));
    code.push(Span::keyed(sep, ","));
    code.push(Span::keyed(Key::for_part(i, kind.y_part()), fmt_num(y)));
}

fn code_space(i: usize) -> Span {
    Span::keyed(Key::for_command(i), " ")
}

fn explain_command(commands: &[Command], i: usize, c: &Command) -> ExplanationItem {
    let mut code: Vec<Span> = Vec::new();
    let mut prose: Vec<Paragraph> = Vec::new();

    match *c {
        Command::MoveTo { x, y, relative } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = vec![Span::keyed(Key::for_part(i, Part::Command), "Move")];
            if relative {
                p.push(Span::plain(" it "));
                push_relative_point(&mut p, i, Some(x), Some(y));
                p.push(Span::plain(" from the current position"));
            } else {
                p.push(Span::plain(" it to "));
                push_point(&mut p, i, PointKind::Destination, x, y, relative);
            }
            prose.push(Paragraph::from_spans(p));
        }

        Command::ClosePath => {
            code.push(Span::keyed(Key::for_command(i), "Z"));
            prose.push(Paragraph::from_spans(vec![Span::plain(
                "Draw a line straight back to the start",
            )]));
        }

        Command::LineTo { x, y, relative } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = Vec::new();
            if relative {
                p.push(Span::plain("Move "));
                push_relative_point(&mut p, i, Some(x), Some(y));
                p.push(Span::plain(" from the current position"));
            } else {
                p.push(Span::plain("Draw a "));
                p.push(Span::keyed(Key::for_part(i, Part::Command), "line"));
                p.push(Span::plain(" to "));
                push_point(&mut p, i, PointKind::Destination, x, y, relative);
            }
            prose.push(Paragraph::from_spans(p));
        }

        Command::HorizontalLineTo { x, relative } => {
            push_letter(&mut code, i, c);
            code.push(Span::keyed(Key::for_part(i, Part::X), fmt_num(x)));

            let mut p = vec![Span::plain("Move ")];
            if relative {
                push_relative_point(&mut p, i, Some(x), None);
                p.push(Span::plain(" from the current position"));
            } else {
                p.push(Span::keyed(Key::for_part(i, Part::Command), "horizontally"));
                p.push(Span::plain(" to "));
                p.push(Span::keyed(Key::for_part(i, Part::X), fmt_num(x)));
            }
            prose.push(Paragraph::from_spans(p));
        }

        Command::VerticalLineTo { y, relative } => {
            push_letter(&mut code, i, c);
            code.push(Span::keyed(Key::for_part(i, Part::Y), fmt_num(y)));

            let mut p = vec![Span::plain("Move ")];
            if relative {
                push_relative_point(&mut p, i, None, Some(y));
                p.push(Span::plain(" from the current position"));
            } else {
                p.push(Span::keyed(Key::for_part(i, Part::Command), "vertically"));
                p.push(Span::plain(" to "));
                p.push(Span::keyed(Key::for_part(i, Part::Y), fmt_num(y)));
            }
            prose.push(Paragraph::from_spans(p));
        }

        Command::CubicCurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative,
        } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::StartControl, x1, y1);
            code.push(code_space(i));
            push_code_pair(&mut code, i, PointKind::EndControl, x2, y2);
            code.push(code_space(i));
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = vec![
                Span::plain("Draw a "),
                Span::plain("Bézier ").with_link(HelpTopic::BezierCurve),
                Span::keyed(Key::for_part(i, Part::Command), "curve")
                    .with_link(HelpTopic::BezierCurve),
                Span::plain(" from the current point to a new point "),
            ];
            push_point(&mut p, i, PointKind::Destination, x, y, relative);
            prose.push(Paragraph::from_spans(p));

            let mut p = vec![
                Span::plain("The "),
                Span::keyed(Key::for_part(i, Part::Cp1), "start control point"),
                Span::plain(" is "),
            ];
            push_point(&mut p, i, PointKind::StartControl, x1, y1, relative);
            p.push(Span::plain(" and the "));
            p.push(Span::keyed(Key::for_part(i, Part::Cp2), "end control point"));
            p.push(Span::plain(" is "));
            push_point(&mut p, i, PointKind::EndControl, x2, y2, relative);
            prose.push(Paragraph::from_spans(p));
        }

        Command::SmoothCubicCurveTo {
            x2,
            y2,
            x,
            y,
            relative,
        } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::EndControl, x2, y2);
            code.push(code_space(i));
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = vec![
                Span::plain("Draw a "),
                Span::keyed(Key::for_part(i, Part::Command), "smooth")
                    .with_link(HelpTopic::BezierCurve),
                Span::plain(" Bézier curve").with_link(HelpTopic::BezierCurve),
                Span::plain(" from the current point to a new point "),
            ];
            push_point(&mut p, i, PointKind::Destination, x, y, relative);
            prose.push(Paragraph::from_spans(p));

            // The start control point exists only as a rule, not as numbers:
            // phrase it, never compute it.
            let mut p = vec![
                Span::plain("The "),
                Span::keyed(Key::for_part(i, Part::Cp1), "start control point"),
                Span::plain(" is "),
                Span::keyed(Key::for_part(i, Part::Cp1), REFLECTION),
                Span::plain(" and the "),
                Span::keyed(Key::for_part(i, Part::Cp2), "end control point"),
                Span::plain(" is "),
            ];
            push_point(&mut p, i, PointKind::EndControl, x2, y2, relative);
            prose.push(Paragraph::from_spans(p));
        }

        Command::QuadraticCurveTo {
            x1,
            y1,
            x,
            y,
            relative,
        } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::Control, x1, y1);
            code.push(code_space(i));
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = vec![
                Span::plain("Draw a "),
                Span::keyed(Key::for_part(i, Part::Command), "quadratic")
                    .with_link(HelpTopic::BezierCurve),
                Span::plain(" Bézier curve").with_link(HelpTopic::BezierCurve),
                Span::plain(" from the current point to a new point "),
            ];
            push_point(&mut p, i, PointKind::Destination, x, y, relative);
            prose.push(Paragraph::from_spans(p));

            let mut p = vec![
                Span::plain("The "),
                Span::keyed(Key::for_part(i, Part::Cp), "control point"),
                Span::plain(" is "),
            ];
            push_point(&mut p, i, PointKind::Control, x1, y1, relative);
            prose.push(Paragraph::from_spans(p));
        }

        Command::SmoothQuadraticCurveTo { x, y, relative } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = vec![
                Span::plain("Draw a "),
                Span::plain("quadratic Bézier curve").with_link(HelpTopic::BezierCurve),
                Span::plain(" from the current point to a new point "),
            ];
            push_point(&mut p, i, PointKind::Destination, x, y, relative);
            prose.push(Paragraph::from_spans(p));

            prose.push(Paragraph::from_spans(vec![
                Span::plain("The "),
                Span::keyed(Key::for_part(i, Part::Cp), "control point"),
                Span::plain(" is "),
                Span::keyed(Key::for_part(i, Part::Cp), REFLECTION),
            ]));
        }

        Command::Arc {
            rx,
            ry,
            x_rotation,
            large_arc,
            sweep,
            x,
            y,
            relative,
        } => {
            push_letter(&mut code, i, c);
            push_code_pair(&mut code, i, PointKind::Radius, rx, ry);
            code.push(code_space(i));
            code.push(Span::keyed(
                Key::for_part(i, Part::Rotation),
                fmt_num(x_rotation),
            ));
            code.push(code_space(i));
            code.push(Span::keyed(
                Key::for_part(i, Part::OvalLarge),
                fmt_flag(large_arc),
            ));
            code.push(code_space(i));
            code.push(Span::keyed(
                Key::for_part(i, Part::OvalSweep),
                fmt_flag(sweep),
            ));
            code.push(code_space(i));
            push_code_pair(&mut code, i, PointKind::Destination, x, y);

            let mut p = vec![
                Span::plain("Draw an "),
                Span::keyed(Key::for_part(i, Part::Command), "Arc"),
                Span::plain(" curve from the current point to a new point "),
            ];
            push_point(&mut p, i, PointKind::Destination, x, y, relative);
            prose.push(Paragraph::from_spans(p));

            let mut p = vec![
                Span::plain("Its "),
                Span::keyed(Key::for_part(i, Part::Radius), "radii"),
                Span::plain(" are "),
            ];
            push_point(&mut p, i, PointKind::Radius, rx, ry, relative);
            p.push(Span::plain(", and "));
            if x_rotation == 0.0 {
                p.push(Span::plain("with "));
                p.push(Span::keyed(Key::for_part(i, Part::Rotation), "no rotation"));
            } else {
                p.push(Span::plain("its "));
                p.push(Span::keyed(Key::for_part(i, Part::Rotation), "rotation"));
                p.push(Span::plain(" is "));
                p.push(Span::keyed(
                    Key::for_part(i, Part::Rotation),
                    format!(
                        "{} degrees ({})",
                        fmt_num(x_rotation.abs()),
                        if x_rotation > 0.0 {
                            "clockwise"
                        } else {
                            "anti-clockwise"
                        }
                    ),
                ));
            }
            prose.push(Paragraph::from_spans(p));

            prose.push(Paragraph::from_spans(vec![
                Span::plain("Out of the "),
                Span::keyed(
                    Key::for_part(i, Part::Oval),
                    "4 possible arcs described by the above parameters",
                ),
                Span::plain(", this arc is the one "),
                Span::keyed(
                    Key::for_part(i, Part::OvalLarge),
                    format!(
                        "{} than 180 degrees",
                        if large_arc { "greater" } else { "lesser" }
                    ),
                ),
                Span::plain(" and "),
                Span::keyed(
                    Key::for_part(i, Part::OvalSweep),
                    format!(
                        "moving at {} angles",
                        if sweep { "positive" } else { "negative" }
                    ),
                ),
            ]));
        }
    }

    // The pen-state phrase opens the first paragraph for moves and for the
    // command right after one.
    if let Some(prefix) = pen_phrase(commands, i) {
        if let Some(first) = prose.first_mut() {
            first.spans.insert(0, Span::plain(prefix));
        }
    }

    ExplanationItem {
        index: i,
        key: Key::for_command(i),
        code,
        prose,
    }
}
