//! Rendered output types for the two-pane explanation view

use crate::hover::ScrollSink;
use crate::key::Key;
use std::fmt;

/// External tutorial content a prose span links to.
///
/// The crate only emits the identifier; resolving it to a route or anchor is
/// the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    BezierCurve,
}

/// One run of text in either the code or prose view.
///
/// A span with a key participates in hover highlighting; a bare span is
/// inert connective text.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub key: Option<Key>,
    pub text: String,
    pub link: Option<HelpTopic>,
}

impl Span {
    pub(crate) fn plain(text: impl Into<String>) -> Span {
        Span {
            key: None,
            text: text.into(),
            link: None,
        }
    }

    pub(crate) fn keyed(key: Key, text: impl Into<String>) -> Span {
        Span {
            key: Some(key),
            text: text.into(),
            link: None,
        }
    }

    pub(crate) fn with_link(mut self, topic: HelpTopic) -> Span {
        self.link = Some(topic);
        self
    }

    /// Whether hover handlers should be attached to this span.
    pub fn is_highlightable(&self) -> bool {
        self.key.is_some()
    }
}

/// One prose paragraph, a list of spans rendered inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

impl Paragraph {
    pub(crate) fn from_spans(spans: Vec<Span>) -> Paragraph {
        Paragraph { spans }
    }

    /// The paragraph text with all markup stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// The full rendering of one command: code tokens plus prose paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationItem {
    /// Position of the command in the sequence
    pub index: usize,
    /// Whole-command key; also the item's scroll anchor
    pub key: Key,
    pub code: Vec<Span>,
    pub prose: Vec<Paragraph>,
}

impl ExplanationItem {
    /// The code tokens joined back into path syntax.
    pub fn code_text(&self) -> String {
        self.code.iter().map(|s| s.text.as_str()).collect()
    }

    fn spans(&self) -> impl Iterator<Item = &Span> {
        self.code
            .iter()
            .chain(self.prose.iter().flat_map(|p| p.spans.iter()))
    }
}

/// Ordered explanation of a whole path, one item per command.
///
/// This is the handle handed to the hosting view; imperative control goes
/// through it rather than through the rendering tree, which keeps the core
/// testable without a real display surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explanation {
    pub items: Vec<ExplanationItem>,
}

impl Explanation {
    /// Whether any rendered token carries `key`.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.items.iter().any(|item| {
            item.key == *key || item.spans().any(|s| s.key.as_ref() == Some(key))
        })
    }

    /// Bring the token for `key` into view via the host's sink.
    ///
    /// Fire-and-forget: returns whether anything was scrolled. A key that is
    /// not currently rendered is a no-op.
    pub fn scroll_to(&self, key: &Key, sink: &mut dyn ScrollSink) -> bool {
        if self.contains_key(key) {
            sink.scroll_into_view(key);
            true
        } else {
            false
        }
    }
}
