//! Configuration for the multi-select behavior.

use crate::surface::{ChartSurface, PointKey};

/// Observer invoked after every committed selection transition, with the
/// next and previous selections.
pub type OnSelect = Box<dyn FnMut(&[PointKey], &[PointKey])>;

/// Custom highlight treatment. When set, it replaces the default
/// opacity-based highlighting entirely.
pub type OnHighlight = Box<dyn FnMut(&mut dyn ChartSurface, &[PointKey])>;

/// Configuration handed to [`SelectionController::new`](crate::SelectionController::new).
///
/// Everything except `on_select` is optional.
pub struct MultiSelectConfig {
    // ── Seed state ───────────────────────────────────────────────────────────
    /// Points selected before the first click; reflected in point opacity as
    /// soon as the controller attaches.
    pub initial_points: Vec<PointKey>,
    /// Start with click interpretation suspended (see
    /// [`SelectionController::enable`](crate::SelectionController::enable)).
    pub disabled: bool,

    // ── Callbacks ────────────────────────────────────────────────────────────
    /// Selection observer (required).
    pub on_select: OnSelect,
    /// Optional highlight override.
    pub on_highlight_points: Option<OnHighlight>,
}

impl MultiSelectConfig {
    /// Minimal configuration: just the selection observer.
    pub fn new(on_select: impl FnMut(&[PointKey], &[PointKey]) + 'static) -> Self {
        Self {
            initial_points: Vec::new(),
            disabled: false,
            on_select: Box::new(on_select),
            on_highlight_points: None,
        }
    }

    /// Seed the selection present when the controller attaches.
    pub fn with_initial_points(mut self, points: Vec<PointKey>) -> Self {
        self.initial_points = points;
        self
    }

    /// Replace the default opacity highlighting with a custom treatment.
    pub fn with_highlight_override(
        mut self,
        f: impl FnMut(&mut dyn ChartSurface, &[PointKey]) + 'static,
    ) -> Self {
        self.on_highlight_points = Some(Box::new(f));
        self
    }
}
