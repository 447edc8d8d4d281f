//! Parse pest pairs into path commands

use crate::command::{Command, PathData};
use crate::errors::ParseError;
use miette::NamedSource;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "pathdata.pest"]
struct PathDataParser;

/// Parse an SVG path data string into commands plus bounds.
pub fn parse(source: &str) -> Result<PathData, ParseError> {
    let pairs = PathDataParser::parse(Rule::path, source)
        .map_err(|e| pest_error(source, &e))?;

    let mut commands = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::path {
            for inner in pair.into_inner() {
                lower_segment(source, inner, &mut commands)?;
            }
        }
    }
    crate::log::debug!("parsed {} commands", commands.len());
    Ok(PathData::from_commands(commands))
}

fn pest_error(source: &str, e: &pest::error::Error<Rule>) -> ParseError {
    use pest::error::InputLocation;
    let (offset, len) = match &e.location {
        InputLocation::Pos(p) => (*p, 0),
        InputLocation::Span((start, end)) => (*start, end.saturating_sub(*start)),
    };
    let offset = offset.min(source.len());
    ParseError::UnexpectedToken {
        src: NamedSource::new("<path data>", source.to_string()),
        span: (offset, len).into(),
        expected: e.variant.message().to_string(),
    }
}

/// Lower one grammar segment into commands. A segment is one command letter
/// plus however many argument groups followed it.
fn lower_segment(
    source: &str,
    pair: Pair<Rule>,
    out: &mut Vec<Command>,
) -> Result<(), ParseError> {
    let rule = pair.as_rule();
    let relative = pair
        .as_str()
        .starts_with(|c: char| c.is_ascii_lowercase());

    match rule {
        Rule::moveto => {
            // Extra pairs after a moveto are implicit linetos, keeping the
            // moveto's relativity.
            for (i, p) in pair.into_inner().enumerate() {
                let (x, y) = lower_pair(source, p)?;
                if i == 0 {
                    out.push(Command::MoveTo { x, y, relative });
                } else {
                    out.push(Command::LineTo { x, y, relative });
                }
            }
        }
        Rule::closepath => out.push(Command::ClosePath),
        Rule::lineto => {
            for p in pair.into_inner() {
                let (x, y) = lower_pair(source, p)?;
                out.push(Command::LineTo { x, y, relative });
            }
        }
        Rule::hlineto => {
            for p in pair.into_inner() {
                let x = lower_number(source, p)?;
                out.push(Command::HorizontalLineTo { x, relative });
            }
        }
        Rule::vlineto => {
            for p in pair.into_inner() {
                let y = lower_number(source, p)?;
                out.push(Command::VerticalLineTo { y, relative });
            }
        }
        Rule::curveto => {
            for p in pair.into_inner() {
                let mut inner = p.into_inner();
                let (x1, y1) = lower_pair(source, inner.next().unwrap())?;
                let (x2, y2) = lower_pair(source, inner.next().unwrap())?;
                let (x, y) = lower_pair(source, inner.next().unwrap())?;
                out.push(Command::CubicCurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                    relative,
                });
            }
        }
        Rule::smooth_curveto => {
            for p in pair.into_inner() {
                let mut inner = p.into_inner();
                let (x2, y2) = lower_pair(source, inner.next().unwrap())?;
                let (x, y) = lower_pair(source, inner.next().unwrap())?;
                out.push(Command::SmoothCubicCurveTo {
                    x2,
                    y2,
                    x,
                    y,
                    relative,
                });
            }
        }
        Rule::quadto => {
            for p in pair.into_inner() {
                let mut inner = p.into_inner();
                let (x1, y1) = lower_pair(source, inner.next().unwrap())?;
                let (x, y) = lower_pair(source, inner.next().unwrap())?;
                out.push(Command::QuadraticCurveTo { x1, y1, x, y, relative });
            }
        }
        Rule::smooth_quadto => {
            for p in pair.into_inner() {
                let (x, y) = lower_pair(source, p)?;
                out.push(Command::SmoothQuadraticCurveTo { x, y, relative });
            }
        }
        Rule::arcto => {
            for p in pair.into_inner() {
                let mut inner = p.into_inner();
                let rx = lower_number(source, inner.next().unwrap())?;
                let ry = lower_number(source, inner.next().unwrap())?;
                let x_rotation = lower_number(source, inner.next().unwrap())?;
                let large_arc = lower_flag(inner.next().unwrap());
                let sweep = lower_flag(inner.next().unwrap());
                let (x, y) = lower_pair(source, inner.next().unwrap())?;
                out.push(Command::Arc {
                    rx,
                    ry,
                    x_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                    relative,
                });
            }
        }
        Rule::EOI => {}
        _ => unreachable!("unexpected rule in path: {:?}", rule),
    }
    Ok(())
}

fn lower_pair(source: &str, pair: Pair<Rule>) -> Result<(f64, f64), ParseError> {
    let mut inner = pair.into_inner();
    let x = lower_number(source, inner.next().unwrap())?;
    let y = lower_number(source, inner.next().unwrap())?;
    Ok((x, y))
}

fn lower_number(source: &str, pair: Pair<Rule>) -> Result<f64, ParseError> {
    let raw = pair.as_str();
    let span = pair.as_span();
    let value: f64 = raw.parse().map_err(|e| ParseError::InvalidNumber {
        message: format!("{e}"),
        src: NamedSource::new("<path data>", source.to_string()),
        span: (span.start(), span.end() - span.start()).into(),
    })?;
    // Overflowing literals parse to infinity; the engine promises finite
    // operands downstream.
    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            message: format!("`{raw}` does not fit in a finite f64"),
            src: NamedSource::new("<path data>", source.to_string()),
            span: (span.start(), span.end() - span.start()).into(),
        });
    }
    Ok(value)
}

fn lower_flag(pair: Pair<Rule>) -> bool {
    pair.as_str() == "1"
}
