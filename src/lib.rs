//! PointSelect crate root: re-exports and module wiring.
//!
//! This crate provides click-driven multi-select and opacity highlighting
//! for any chart-like rendering surface:
//! - `surface`: the narrow renderer interface plus an in-memory surface
//! - `events`: click events and modifier state
//! - `selection`: the transition rules and [`SelectionController`]
//! - `opacity`: batched per-point opacity projection
//! - `color`: color string parsing, conversion and palette arithmetic
//! - `palette`: global palette for series color allocation
//! - `config`: caller-facing configuration
//! - `error`: typed failure taxonomy

pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod opacity;
pub mod palette;
pub mod selection;
pub mod surface;

// Public re-exports for a compact external API
pub use color::{ColorFormat, Gradient, Rgb};
pub use config::MultiSelectConfig;
pub use error::{ColorParseError, SurfaceNotReadyError};
pub use events::{ClickEvent, KeyModifiers};
pub use opacity::{apply_opacity, opacity_for, MAX_OPACITY, MIN_OPACITY};
pub use selection::{next_selection, SelectionController};
pub use surface::{ChartSurface, MemoryPoint, MemorySeries, MemorySurface, PointKey, SurfacePoint};
