//! Example: replace the default opacity highlighting with a gradient recolor.
//!
//! Selected points are painted with the dark end of a gradient derived from
//! their own base color; everything else keeps its color untouched.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example custom_highlight
//! ```

use pointselect::color::simple_gradient;
use pointselect::{
    ChartSurface, ClickEvent, KeyModifiers, MemorySeries, MemorySurface, MultiSelectConfig,
    PointKey, SelectionController,
};

fn main() {
    let mut surface = MemorySurface::new();
    surface.series.push(MemorySeries::from_values(
        "Gradient highlight",
        &[3.0, 1.0, 4.0, 1.0, 5.0],
        "#6496C8",
    ));

    let config = MultiSelectConfig::new(|next: &[PointKey], _prev: &[PointKey]| {
        println!("selected: {:?}", next);
    })
    .with_highlight_override(|surface: &mut dyn ChartSurface, selection: &[PointKey]| {
        let selection = selection.to_vec();
        surface.for_each_point(&mut |point| {
            if selection.contains(&point.key()) {
                if let Ok(gradient) = simple_gradient(point.color()) {
                    point.set_color(gradient.max_color);
                }
            }
        });
        surface.redraw();
    });

    let mut controller = SelectionController::new(config);
    controller
        .attach(&mut surface)
        .expect("in-memory surface is always ready");

    surface.emit_click(ClickEvent::on_point(
        PointKey::new(2.0, 4.0),
        KeyModifiers::NONE,
    ));
    controller.pump(&mut surface);

    for point in &surface.series[0].points {
        println!("({}, {}): {}", point.key.x, point.key.y, point.color);
    }
}
