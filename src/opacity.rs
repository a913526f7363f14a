//! Opacity projection: recompute every point's visual opacity from the
//! current selection and apply it in one batched pass.

use crate::color::{self, ColorFormat};
use crate::error::ColorParseError;
use crate::surface::{ChartSurface, PointKey, SurfacePoint};

/// Opacity of unselected points while a selection is active.
pub const MIN_OPACITY: f64 = 0.2;
/// Opacity of selected points, and of all points when nothing is selected.
pub const MAX_OPACITY: f64 = 1.0;

/// Opacity function for a selection set.
///
/// With an empty selection nothing is filtered, so every point gets
/// [`MAX_OPACITY`]; otherwise structural members get [`MAX_OPACITY`] and the
/// rest [`MIN_OPACITY`].
pub fn opacity_for(selection: &[PointKey]) -> impl Fn(&PointKey) -> f64 + '_ {
    move |point| {
        if selection.is_empty() || selection.contains(point) {
            MAX_OPACITY
        } else {
            MIN_OPACITY
        }
    }
}

/// Restyle a single point to the given opacity.
///
/// The point's color string is re-derived: classified, converted from hex to
/// an rgb string if needed, channel-extracted, and written back as
/// `rgba(r,g,b,opacity)`. The data-label opacity is set to the same value.
/// Unknown-format colors fail here instead of guessing channels.
pub fn update_point_opacity(
    point: &mut dyn SurfacePoint,
    opacity: f64,
) -> Result<(), ColorParseError> {
    let current = point.color().to_owned();
    let rgb_like = match color::classify(&current) {
        ColorFormat::Hex => color::rgb_to_string(color::hex_to_rgb(&current)?),
        // Unknown falls through to channel extraction, which rejects it.
        ColorFormat::Rgb | ColorFormat::Unknown => current,
    };
    let (rgb, _alpha) = color::parse_channels(&rgb_like)?;
    point.set_color(color::rgba_string(rgb, opacity));
    point.set_label_opacity(opacity);
    Ok(())
}

/// Apply `opacity_of` to every point of every series on the surface, then
/// issue exactly one redraw.
///
/// Point mutations are batched; no intermediate re-render happens. A point
/// whose color cannot be parsed is isolated: the failure is logged as a
/// warning and the pass continues with the remaining points. Callers that
/// need the strict per-point failure can use [`update_point_opacity`].
pub fn apply_opacity<F>(surface: &mut dyn ChartSurface, opacity_of: F)
where
    F: Fn(&PointKey) -> f64,
{
    surface.for_each_point(&mut |point| {
        let key = point.key();
        let opacity = opacity_of(&key);
        if let Err(err) = update_point_opacity(point, opacity) {
            log::warn!("skipping point ({}, {}): {err}", key.x, key.y);
        }
    });
    surface.redraw();
}
