//! Hover synchronization
//!
//! One `HoverState` per explanation view is the single source of truth for
//! "what is currently hovered". Tokens in both the code and prose views read
//! it through `is_highlighted` during a render pass; pointer events write it
//! through the enter/leave surface. Primary highlights take the first
//! semantic color (the hovered token and everything inside it), secondary
//! the other (the coarser token containing the hovered one).

use crate::key::Key;

/// How a rendered token should be highlighted given the current hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// The hovered token itself, or a finer token inside it
    Primary,
    /// A coarser token containing the hovered one
    Secondary,
}

/// Per-view hover state.
///
/// Two states only: idle (`hovering` is `None`) and hovering a key.
/// Transitions are immediate and synchronous; the last event wins.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    hovering: Option<Key>,
}

impl HoverState {
    pub fn new() -> HoverState {
        HoverState::default()
    }

    /// Replace the hovered key. Idempotent; no validation.
    pub fn set_hovering(&mut self, key: Option<Key>) {
        self.hovering = key;
    }

    /// Pointer entered the token for `key`.
    pub fn on_hover_enter(&mut self, key: Key) {
        self.set_hovering(Some(key));
    }

    /// Pointer left whatever was hovered.
    pub fn on_hover_leave(&mut self) {
        self.set_hovering(None);
    }

    pub fn hovering(&self) -> Option<&Key> {
        self.hovering.as_ref()
    }

    /// Highlight decision for one rendered token.
    ///
    /// Hovering a coarse key lights its descendants up as `Primary`;
    /// hovering a fine key lights its ancestors up as `Secondary`. The two
    /// can never both hold for one candidate.
    pub fn is_highlighted(&self, candidate: &Key) -> Highlight {
        let Some(hovering) = &self.hovering else {
            return Highlight::None;
        };
        if candidate == hovering || candidate.is_descendant_of(hovering) {
            Highlight::Primary
        } else if hovering.is_descendant_of(candidate) {
            Highlight::Secondary
        } else {
            Highlight::None
        }
    }
}

/// Host-side scrolling, implemented by whatever owns the rendered elements.
///
/// `Explanation::scroll_to` looks the key up first, so implementations never
/// see keys that are not rendered.
pub trait ScrollSink {
    fn scroll_into_view(&mut self, key: &Key);
}
