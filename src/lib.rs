//! Plain-English explanations of SVG path data.
//!
//! `pathprose` turns a path string like `M 10 10 l 5 -3` into, per command,
//! a keyed token rendering of the syntax and a prose description of what the
//! command does in terms of the current pen position. Every sub-token (a
//! coordinate, a control point, an arc flag) carries a stable hierarchical
//! key, so a host can cross-highlight the code and prose views of the same
//! command and scroll the explanation to any token programmatically.
//!
//! ```
//! use pathprose::{explain_path, Highlight, HoverState, Key, Part};
//!
//! let explanation = explain_path("M 10 10 L 20 20").unwrap();
//! assert_eq!(explanation.items.len(), 2);
//! assert_eq!(explanation.items[1].code_text(), "L 20,20");
//!
//! // Hovering the whole second command lights up its coordinates.
//! let mut hover = HoverState::new();
//! hover.on_hover_enter(Key::for_command(1));
//! assert_eq!(
//!     hover.is_highlighted(&Key::for_part(1, Part::X)),
//!     Highlight::Primary,
//! );
//! ```

pub mod command;
pub mod errors;
pub mod explain;
pub mod hover;
pub mod key;
mod log;
pub mod parse;

pub use command::{Bounds, Command, PathData};
pub use errors::ParseError;
pub use explain::{Explanation, ExplanationItem, HelpTopic, Paragraph, Span, explain};
pub use hover::{Highlight, HoverState, ScrollSink};
pub use key::{Key, Part, PointKind};
pub use parse::parse;

/// Parse a path string and explain it in one step.
pub fn explain_path(source: &str) -> Result<Explanation, ParseError> {
    let data = parse(source)?;
    Ok(explain(&data))
}
