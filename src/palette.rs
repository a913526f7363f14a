//! Global palette used for series color allocation.
//!
//! Callers that theme their charts can swap the palette once and let every
//! subsequent allocation pick it up; the default is a standard 8-color
//! categorical set.

use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::color;

/// Default categorical palette (hex).
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
];

static GLOBAL_PALETTE: Lazy<Mutex<Vec<String>>> =
    Lazy::new(|| Mutex::new(DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()));

/// Get a copy of the current global palette.
///
/// The value is cloned so callers can freely mutate the returned vector.
pub fn global_palette() -> Vec<String> {
    GLOBAL_PALETTE.lock().unwrap().clone()
}

/// Replace the global palette. An empty palette is ignored.
pub fn set_global_palette(new: Vec<String>) {
    if new.is_empty() {
        return;
    }
    let mut guard = GLOBAL_PALETTE.lock().unwrap();
    *guard = new;
}

/// Color for the series at `index`: cyclic assignment over the interleaved
/// global palette, so adjacent series stay visually distinct even when the
/// palette itself is a smooth ramp.
pub fn series_color(index: usize) -> String {
    let palette = GLOBAL_PALETTE.lock().unwrap();
    let ordered = color::interleave(&palette);
    ordered[index % ordered.len()].clone()
}
