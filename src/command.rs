//! Path command types
//!
//! These types represent the parsed structure of an SVG path data string:
//! an ordered command sequence plus the bounding box swept by the pen.

use glam::{DVec2, dvec2};

/// One instruction in a path description.
///
/// Lowercase command letters set `relative: true`, meaning coordinate
/// operands are offsets from the current pen position. Radii and rotation
/// are never offsets, even on a relative arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `M`/`m` - establish a new subpath start
    MoveTo { x: f64, y: f64, relative: bool },
    /// `Z`/`z` - draw back to the subpath's starting point
    ClosePath,
    /// `L`/`l`
    LineTo { x: f64, y: f64, relative: bool },
    /// `H`/`h`
    HorizontalLineTo { x: f64, relative: bool },
    /// `V`/`v`
    VerticalLineTo { y: f64, relative: bool },
    /// `C`/`c` - cubic Bézier with two explicit control points
    CubicCurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    /// `S`/`s` - cubic Bézier whose first control point is the reflection
    /// of the previous cubic's second control point
    SmoothCubicCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    /// `Q`/`q` - quadratic Bézier with one explicit control point
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    /// `T`/`t` - quadratic Bézier whose control point is the reflection
    /// of the previous quadratic's control point
    SmoothQuadraticCurveTo { x: f64, y: f64, relative: bool },
    /// `A`/`a` - elliptical arc
    Arc {
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
        relative: bool,
    },
}

impl Command {
    /// The command letter as it would appear in path data.
    pub fn letter(&self) -> char {
        let (upper, relative) = match self {
            Command::MoveTo { relative, .. } => ('M', *relative),
            Command::ClosePath => ('Z', false),
            Command::LineTo { relative, .. } => ('L', *relative),
            Command::HorizontalLineTo { relative, .. } => ('H', *relative),
            Command::VerticalLineTo { relative, .. } => ('V', *relative),
            Command::CubicCurveTo { relative, .. } => ('C', *relative),
            Command::SmoothCubicCurveTo { relative, .. } => ('S', *relative),
            Command::QuadraticCurveTo { relative, .. } => ('Q', *relative),
            Command::SmoothQuadraticCurveTo { relative, .. } => ('T', *relative),
            Command::Arc { relative, .. } => ('A', *relative),
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// Whether operands are offsets from the current pen position.
    pub fn is_relative(&self) -> bool {
        match self {
            Command::ClosePath => false,
            Command::MoveTo { relative, .. }
            | Command::LineTo { relative, .. }
            | Command::HorizontalLineTo { relative, .. }
            | Command::VerticalLineTo { relative, .. }
            | Command::CubicCurveTo { relative, .. }
            | Command::SmoothCubicCurveTo { relative, .. }
            | Command::QuadraticCurveTo { relative, .. }
            | Command::SmoothQuadraticCurveTo { relative, .. }
            | Command::Arc { relative, .. } => *relative,
        }
    }

    pub fn is_move_to(&self) -> bool {
        matches!(self, Command::MoveTo { .. })
    }
}

/// Axis-aligned bounding box over the positions a path visits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create an empty bounding box (will collapse to zeros if never expanded).
    fn empty() -> Self {
        Bounds {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Expand to include a point.
    fn expand(&mut self, p: DVec2) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    }
}

/// A parsed path: the command sequence and the bounding box swept by the pen.
///
/// Immutable for the duration of one explanation pass. Hosts that re-parse on
/// input change should build a fresh `PathData` and swap it in whole.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    pub commands: Vec<Command>,
    pub bounds: Bounds,
}

impl PathData {
    /// Build `PathData` from a command sequence, computing the bounds by
    /// walking the pen through every endpoint and explicit control point.
    ///
    /// The bounds are conservative: control points are included as if they
    /// were on the path, and true curve extrema are not computed. Implicit
    /// (reflected) control points of smooth variants are not included.
    pub fn from_commands(commands: Vec<Command>) -> PathData {
        let mut bounds = Bounds::empty();
        let mut pen = DVec2::ZERO;
        let mut subpath_start = DVec2::ZERO;

        let resolve = |pen: DVec2, x: f64, y: f64, relative: bool| {
            if relative { pen + dvec2(x, y) } else { dvec2(x, y) }
        };

        for c in &commands {
            match *c {
                Command::MoveTo { x, y, relative } => {
                    pen = resolve(pen, x, y, relative);
                    subpath_start = pen;
                    bounds.expand(pen);
                }
                Command::ClosePath => {
                    pen = subpath_start;
                }
                Command::LineTo { x, y, relative } => {
                    pen = resolve(pen, x, y, relative);
                    bounds.expand(pen);
                }
                Command::HorizontalLineTo { x, relative } => {
                    pen.x = if relative { pen.x + x } else { x };
                    bounds.expand(pen);
                }
                Command::VerticalLineTo { y, relative } => {
                    pen.y = if relative { pen.y + y } else { y };
                    bounds.expand(pen);
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
                    bounds.expand(resolve(pen, x1, y1, relative));
                    bounds.expand(resolve(pen, x2, y2, relative));
                    pen = resolve(pen, x, y, relative);
                    bounds.expand(pen);
                }
                Command::SmoothCubicCurveTo {
                    x2,
                    y2,
                    x,
                    y,
                    relative,
                } => {
                    bounds.expand(resolve(pen, x2, y2, relative));
                    pen = resolve(pen, x, y, relative);
                    bounds.expand(pen);
                }
                Command::QuadraticCurveTo {
                    x1,
                    y1,
                    x,
                    y,
                    relative,
                } => {
                    bounds.expand(resolve(pen, x1, y1, relative));
                    pen = resolve(pen, x, y, relative);
                    bounds.expand(pen);
                }
                Command::SmoothQuadraticCurveTo { x, y, relative } => {
                    pen = resolve(pen, x, y, relative);
                    bounds.expand(pen);
                }
                Command::Arc { x, y, relative, .. } => {
                    pen = resolve(pen, x, y, relative);
                    bounds.expand(pen);
                }
            }
        }

        if bounds.is_empty() {
            bounds = Bounds::default();
        }
        PathData { commands, bounds }
    }
}
