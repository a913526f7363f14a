//! Click events as delivered by a surface's container.

use serde::{Deserialize, Serialize};

use crate::surface::PointKey;

/// Keyboard modifier state accompanying a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub command: bool,
}

impl KeyModifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        command: false,
    };

    /// Whether the platform multi-select modifier is active
    /// (ctrl, shift, or command).
    pub fn is_multi_select(self) -> bool {
        self.ctrl || self.shift || self.command
    }
}

/// A click on a chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// The point the click landed on; `None` for empty chart area.
    pub point: Option<PointKey>,
    /// Modifier-key state at click time.
    pub modifiers: KeyModifiers,
    /// Whether the click landed inside the legend area.
    pub on_legend: bool,
}

impl ClickEvent {
    /// A click that hit a data point.
    pub fn on_point(point: PointKey, modifiers: KeyModifiers) -> Self {
        Self {
            point: Some(point),
            modifiers,
            on_legend: false,
        }
    }

    /// A click on empty chart area.
    pub fn empty_area() -> Self {
        Self {
            point: None,
            modifiers: KeyModifiers::NONE,
            on_legend: false,
        }
    }

    /// A click inside the legend.
    pub fn legend() -> Self {
        Self {
            point: None,
            modifiers: KeyModifiers::NONE,
            on_legend: true,
        }
    }
}
