//! The narrow interface this crate needs from a chart renderer, plus an
//! in-memory reference implementation.
//!
//! A renderer only has to do four things: enumerate its points, let them be
//! restyled without an intermediate re-render, redraw on demand, and hand out
//! a click-event channel once its container exists. Everything else (hit
//! testing, layout, drawing) stays on the renderer's side of the seam.

use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::events::ClickEvent;

// ─────────────────────────────────────────────────────────────────────────────
// PointKey
// ─────────────────────────────────────────────────────────────────────────────

/// Structural identity of a rendered point: its (x, y) coordinate pair.
///
/// Two keys denote the same point iff their coordinates coincide, no matter
/// which object instance produced them. Equality is epsilon-tolerant so that
/// coordinates reconstructed from event payloads still match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointKey {
    pub x: f64,
    pub y: f64,
}

impl PointKey {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for PointKey {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < f64::EPSILON && (self.y - other.y).abs() < f64::EPSILON
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Renderer traits
// ─────────────────────────────────────────────────────────────────────────────

/// A single restylable point exposed by a surface.
pub trait SurfacePoint {
    /// Coordinates identifying this point.
    fn key(&self) -> PointKey;
    /// Current color string (hex or rgb/rgba form).
    fn color(&self) -> &str;
    /// Restyle the point. Must not trigger a re-render by itself; the caller
    /// batches mutations and issues one [`ChartSurface::redraw`] afterwards.
    fn set_color(&mut self, color: String);
    /// Set the opacity of the point's data label.
    fn set_label_opacity(&mut self, opacity: f64);
}

/// A chart-like rendering surface hosting series of points.
pub trait ChartSurface {
    /// Subscribe to click events on the surface's container.
    ///
    /// Returns `None` while the surface has no queryable click container yet
    /// (still rendering). Dropping the receiver unregisters the listener.
    fn subscribe_clicks(&mut self) -> Option<Receiver<ClickEvent>>;

    /// Visit every point of every series, in series order.
    fn for_each_point(&mut self, visit: &mut dyn FnMut(&mut dyn SurfacePoint));

    /// Issue one full redraw of the surface.
    fn redraw(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory surface
// ─────────────────────────────────────────────────────────────────────────────

/// A point held by [`MemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPoint {
    pub key: PointKey,
    pub color: String,
    pub label_opacity: f64,
}

impl MemoryPoint {
    pub fn new(x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            key: PointKey::new(x, y),
            color: color.into(),
            label_opacity: 1.0,
        }
    }
}

impl SurfacePoint for MemoryPoint {
    fn key(&self) -> PointKey {
        self.key
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn set_color(&mut self, color: String) {
        self.color = color;
    }

    fn set_label_opacity(&mut self, opacity: f64) {
        self.label_opacity = opacity;
    }
}

/// A named series of points.
#[derive(Debug, Clone, Default)]
pub struct MemorySeries {
    pub name: String,
    pub points: Vec<MemoryPoint>,
}

impl MemorySeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Build a series from plain Y values: point `i` gets coordinates
    /// `(i, values[i])` and the given base color.
    pub fn from_values(name: impl Into<String>, values: &[f64], color: &str) -> Self {
        Self {
            name: name.into(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &y)| MemoryPoint::new(i as f64, y, color))
                .collect(),
        }
    }
}

/// In-memory [`ChartSurface`] for tests, demos and headless embedders.
///
/// Tracks how many redraws were issued and delivers clicks through an mpsc
/// channel, like a real renderer container would.
#[derive(Debug)]
pub struct MemorySurface {
    pub series: Vec<MemorySeries>,
    ready: bool,
    redraws: usize,
    clicks: Option<Sender<ClickEvent>>,
}

impl MemorySurface {
    /// An empty, ready surface.
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            ready: true,
            redraws: 0,
            clicks: None,
        }
    }

    /// A surface whose click container does not exist yet; `subscribe_clicks`
    /// returns `None` until [`set_ready`](Self::set_ready) is called.
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Number of redraws issued so far.
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Deliver a click to the subscribed controller, if any.
    ///
    /// Returns `false` when nobody is subscribed (listener unbound or never
    /// bound); the click is dropped, as a browser would drop it.
    pub fn emit_click(&self, event: ClickEvent) -> bool {
        match &self.clicks {
            Some(tx) => tx.send(event).is_ok(),
            None => false,
        }
    }

    /// Convenience accessor for assertions.
    pub fn point(&self, series: usize, index: usize) -> Option<&MemoryPoint> {
        self.series.get(series)?.points.get(index)
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSurface for MemorySurface {
    fn subscribe_clicks(&mut self) -> Option<Receiver<ClickEvent>> {
        if !self.ready {
            return None;
        }
        // One controller per surface: a new subscription replaces the old.
        let (tx, rx) = channel();
        self.clicks = Some(tx);
        Some(rx)
    }

    fn for_each_point(&mut self, visit: &mut dyn FnMut(&mut dyn SurfacePoint)) {
        for series in &mut self.series {
            for point in &mut series.points {
                visit(point);
            }
        }
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}
