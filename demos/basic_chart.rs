//! Example: multi-select on a basic ten-point column series.
//!
//! Wires a [`SelectionController`] to an in-memory surface, then simulates a
//! plain click, a ctrl-click and an empty-area click, printing the selection
//! and the resulting point opacities after each one.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example basic_chart
//! ```

use pointselect::{
    ClickEvent, KeyModifiers, MemorySeries, MemorySurface, MultiSelectConfig, PointKey,
    SelectionController,
};

fn print_surface(surface: &MemorySurface) {
    for (i, point) in surface.series[0].points.iter().enumerate() {
        println!(
            "  point {} ({}, {}): {}",
            i, point.key.x, point.key.y, point.color
        );
    }
}

fn main() {
    let mut surface = MemorySurface::new();
    surface.series.push(MemorySeries::from_values(
        "My chart",
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        &pointselect::palette::series_color(0),
    ));

    let config = MultiSelectConfig::new(|next: &[PointKey], prev: &[PointKey]| {
        println!("onSelect: {} point(s) selected (was {})", next.len(), prev.len());
    });
    let mut controller = SelectionController::new(config);
    controller
        .attach(&mut surface)
        .expect("in-memory surface is always ready");

    let ctrl = KeyModifiers {
        ctrl: true,
        ..KeyModifiers::NONE
    };

    println!("plain click on (2, 3):");
    surface.emit_click(ClickEvent::on_point(PointKey::new(2.0, 3.0), KeyModifiers::NONE));
    controller.pump(&mut surface);
    print_surface(&surface);

    println!("ctrl-click on (5, 6):");
    surface.emit_click(ClickEvent::on_point(PointKey::new(5.0, 6.0), ctrl));
    controller.pump(&mut surface);
    print_surface(&surface);

    println!("click on empty area:");
    surface.emit_click(ClickEvent::empty_area());
    controller.pump(&mut surface);
    print_surface(&surface);
}
