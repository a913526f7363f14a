use pointselect::{
    apply_opacity, opacity_for, ChartSurface, ClickEvent, KeyModifiers, MemoryPoint,
    MemorySeries, MemorySurface, MultiSelectConfig, PointKey, SelectionController, SurfacePoint,
    MAX_OPACITY, MIN_OPACITY,
};
use pointselect::opacity::update_point_opacity;

fn surface_with_colors(colors: &[&str]) -> MemorySurface {
    let mut surface = MemorySurface::new();
    surface.series.push(MemorySeries {
        name: "series".to_string(),
        points: colors
            .iter()
            .enumerate()
            .map(|(i, c)| MemoryPoint::new((i + 1) as f64, (i + 1) as f64, *c))
            .collect(),
    });
    surface
}

#[test]
fn end_to_end_opacity_assignment() {
    let mut surface = surface_with_colors(&["#1F77B4", "#1F77B4", "#1F77B4"]);
    let mut controller =
        SelectionController::new(MultiSelectConfig::new(|_: &[PointKey], _: &[PointKey]| {}));
    controller.attach(&mut surface).unwrap();
    assert_eq!(surface.redraw_count(), 1);

    // Click P1: it stays opaque, the others dim.
    controller.handle_click(
        &mut surface,
        &ClickEvent::on_point(PointKey::new(1.0, 1.0), KeyModifiers::NONE),
    );
    assert_eq!(controller.selection(), [PointKey::new(1.0, 1.0)]);
    assert_eq!(surface.point(0, 0).unwrap().color, "rgba(31,119,180,1)");
    assert_eq!(surface.point(0, 0).unwrap().label_opacity, MAX_OPACITY);
    assert_eq!(surface.point(0, 1).unwrap().color, "rgba(31,119,180,0.2)");
    assert_eq!(surface.point(0, 2).unwrap().label_opacity, MIN_OPACITY);
    assert_eq!(surface.redraw_count(), 2);

    // Click empty area: everything restored, selection cleared.
    controller.handle_click(&mut surface, &ClickEvent::empty_area());
    assert!(controller.selection().is_empty());
    for i in 0..3 {
        assert_eq!(surface.point(0, i).unwrap().color, "rgba(31,119,180,1)");
        assert_eq!(surface.point(0, i).unwrap().label_opacity, MAX_OPACITY);
    }
    assert_eq!(surface.redraw_count(), 3);
}

#[test]
fn one_redraw_per_pass() {
    let mut surface = surface_with_colors(&["#FF0000"; 20]);
    apply_opacity(&mut surface, opacity_for(&[]));
    assert_eq!(surface.redraw_count(), 1);
}

#[test]
fn hex_and_rgb_sources_both_normalize_to_rgba() {
    let mut surface = surface_with_colors(&["#0A141E", "rgb(10,20,30)", "rgba(10,20,30,0.7)"]);
    apply_opacity(&mut surface, opacity_for(&[]));
    for i in 0..3 {
        assert_eq!(surface.point(0, i).unwrap().color, "rgba(10,20,30,1)");
    }
}

#[test]
fn malformed_color_is_isolated() {
    let mut surface = surface_with_colors(&["#1F77B4", "definitely-not-a-color", "#1F77B4"]);
    apply_opacity(&mut surface, opacity_for(&[PointKey::new(1.0, 1.0)]));

    // Healthy points were restyled.
    assert_eq!(surface.point(0, 0).unwrap().color, "rgba(31,119,180,1)");
    assert_eq!(surface.point(0, 2).unwrap().color, "rgba(31,119,180,0.2)");
    // The malformed one was skipped untouched.
    assert_eq!(surface.point(0, 1).unwrap().color, "definitely-not-a-color");
    assert_eq!(surface.point(0, 1).unwrap().label_opacity, 1.0);
    // The batched redraw still happened.
    assert_eq!(surface.redraw_count(), 1);
}

#[test]
fn update_point_opacity_reports_the_offending_string() {
    let mut point = MemoryPoint::new(1.0, 1.0, "chartreuse");
    let err = update_point_opacity(&mut point, MAX_OPACITY).unwrap_err();
    assert_eq!(err.color, "chartreuse");
    assert_eq!(point.color(), "chartreuse");
}

#[test]
fn opacity_function_matches_selection_membership() {
    let selection = [PointKey::new(1.0, 1.0)];
    let of = opacity_for(&selection);
    assert_eq!(of(&PointKey::new(1.0, 1.0)), MAX_OPACITY);
    assert_eq!(of(&PointKey::new(9.0, 9.0)), MIN_OPACITY);

    let of_empty = opacity_for(&[]);
    assert_eq!(of_empty(&PointKey::new(9.0, 9.0)), MAX_OPACITY);
}

#[test]
fn highlight_override_replaces_opacity_projection() {
    let mut surface = surface_with_colors(&["#1F77B4", "#1F77B4"]);
    let config = MultiSelectConfig::new(|_: &[PointKey], _: &[PointKey]| {}).with_highlight_override(
        |surface: &mut dyn ChartSurface, selection: &[PointKey]| {
            let selection = selection.to_vec();
            surface.for_each_point(&mut |point| {
                if selection.contains(&point.key()) {
                    point.set_color("#FFD700".to_string());
                }
            });
            surface.redraw();
        },
    );
    let mut controller = SelectionController::new(config);
    controller.attach(&mut surface).unwrap();

    controller.handle_click(
        &mut surface,
        &ClickEvent::on_point(PointKey::new(1.0, 1.0), KeyModifiers::NONE),
    );

    // The override painted the selected point; nobody rewrote colors to rgba
    // or touched label opacity.
    assert_eq!(surface.point(0, 0).unwrap().color, "#FFD700");
    assert_eq!(surface.point(0, 1).unwrap().color, "#1F77B4");
    assert_eq!(surface.point(0, 1).unwrap().label_opacity, 1.0);
}
