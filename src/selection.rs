//! Selection state machine and the controller that drives it.
//!
//! The transition rules live in [`next_selection`], a pure function over the
//! current selection and one click event, unit-testable without any surface.
//! [`SelectionController`] owns the committed state, the click-event binding
//! and the side effects (opacity projection, observer notification).

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::config::{MultiSelectConfig, OnHighlight, OnSelect};
use crate::error::SurfaceNotReadyError;
use crate::events::ClickEvent;
use crate::opacity::{apply_opacity, opacity_for};
use crate::surface::{ChartSurface, PointKey};

// ─────────────────────────────────────────────────────────────────────────────
// Transition function
// ─────────────────────────────────────────────────────────────────────────────

/// Compute the selection resulting from one click.
///
/// Returns `None` when the click is not a selection event (legend area).
/// Otherwise returns the next selection, most-recent-first:
///
/// - empty chart area: clear;
/// - a point already selected: remove it (toggle-off wins over the modifier);
/// - a new point with the multi-select modifier: prepend;
/// - a new point without: replace (single-select).
pub fn next_selection(current: &[PointKey], event: &ClickEvent) -> Option<Vec<PointKey>> {
    if event.on_legend {
        return None;
    }
    let Some(clicked) = event.point else {
        return Some(Vec::new());
    };
    if current.contains(&clicked) {
        return Some(current.iter().copied().filter(|p| *p != clicked).collect());
    }
    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(clicked);
    if event.modifiers.is_multi_select() {
        next.extend_from_slice(current);
    }
    Some(next)
}

// ─────────────────────────────────────────────────────────────────────────────
// SelectionController
// ─────────────────────────────────────────────────────────────────────────────

/// Owns the current selection and interprets clicks for one surface.
///
/// The click binding is the owned [`Receiver`]: dropping the controller (or
/// calling [`detach`](Self::detach)) unregisters the listener on every exit
/// path. Detaching never mutates surface point state.
pub struct SelectionController {
    selection: Vec<PointKey>,
    disabled: bool,
    clicks: Option<Receiver<ClickEvent>>,
    on_select: OnSelect,
    on_highlight: Option<OnHighlight>,
}

impl SelectionController {
    pub fn new(config: MultiSelectConfig) -> Self {
        Self {
            selection: config.initial_points,
            disabled: config.disabled,
            clicks: None,
            on_select: config.on_select,
            on_highlight: config.on_highlight_points,
        }
    }

    /// The committed selection, most-recent-first.
    pub fn selection(&self) -> &[PointKey] {
        &self.selection
    }

    pub fn is_attached(&self) -> bool {
        self.clicks.is_some()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Bind to a surface: subscribe to its click events and project opacity
    /// once, so a freshly rendered surface reflects a pre-existing selection
    /// without waiting for a click.
    ///
    /// Fails with [`SurfaceNotReadyError`] (binding nothing) while the
    /// surface has no click container; the caller may retry later.
    pub fn attach(&mut self, surface: &mut dyn ChartSurface) -> Result<(), SurfaceNotReadyError> {
        let rx = surface.subscribe_clicks().ok_or(SurfaceNotReadyError)?;
        self.clicks = Some(rx);
        let selection = std::mem::take(&mut self.selection);
        self.highlight(surface, &selection);
        self.selection = selection;
        Ok(())
    }

    /// Unbind from the surface. Point state on the surface is left as-is.
    pub fn detach(&mut self) {
        self.clicks = None;
    }

    /// Drain and interpret all pending click events, in delivery order.
    ///
    /// Each event observes the selection committed by the previous one. If
    /// the surface side of the channel is gone, the controller detaches.
    pub fn pump(&mut self, surface: &mut dyn ChartSurface) {
        loop {
            let next = match &self.clicks {
                Some(rx) => rx.try_recv(),
                None => return,
            };
            match next {
                Ok(event) => self.handle_click(surface, &event),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.clicks = None;
                    return;
                }
            }
        }
    }

    /// Interpret a single click event and run it to completion: compute the
    /// next selection, re-project opacity, notify the observer, commit.
    ///
    /// Clicks while detached or disabled are silently ignored.
    pub fn handle_click(&mut self, surface: &mut dyn ChartSurface, event: &ClickEvent) {
        if self.clicks.is_none() || self.disabled {
            log::debug!(
                "click ignored (attached: {}, disabled: {})",
                self.clicks.is_some(),
                self.disabled
            );
            return;
        }
        let Some(next) = next_selection(&self.selection, event) else {
            // Legend interactions are not selection events.
            return;
        };
        self.commit(surface, next);
    }

    /// Clear the selection (notifying the observer, as if an empty-area
    /// click occurred) and suppress click interpretation until
    /// [`enable`](Self::enable). Other configuration is retained.
    pub fn disable(&mut self, surface: &mut dyn ChartSurface) {
        if self.disabled {
            return;
        }
        self.commit(surface, Vec::new());
        self.disabled = true;
    }

    /// Lift the suppression installed by [`disable`](Self::disable).
    pub fn enable(&mut self) {
        self.disabled = false;
    }

    fn commit(&mut self, surface: &mut dyn ChartSurface, next: Vec<PointKey>) {
        self.highlight(surface, &next);
        (self.on_select)(&next, &self.selection);
        self.selection = next;
    }

    fn highlight(&mut self, surface: &mut dyn ChartSurface, points: &[PointKey]) {
        match self.on_highlight.as_mut() {
            Some(custom) => custom(surface, points),
            None => apply_opacity(surface, opacity_for(points)),
        }
    }
}
