use approx::assert_relative_eq;
use profile_charts::core::{
    ChartLayout, Margins, Viewport, compute_nice_ceiling, map_linear, map_time_to_x,
    map_value_to_y,
};

#[test]
fn nice_ceiling_rounds_up_to_step() {
    assert_eq!(compute_nice_ceiling(0.0, 1000.0), 1000.0);
    assert_eq!(compute_nice_ceiling(3500.0, 1000.0), 4000.0);
    assert_eq!(compute_nice_ceiling(4000.0, 1000.0), 4000.0);
    assert_eq!(compute_nice_ceiling(4001.0, 1000.0), 5000.0);
    assert_eq!(compute_nice_ceiling(120.0, 50.0), 150.0);
}

#[test]
fn map_linear_interpolates_between_range_ends() {
    assert_eq!(map_linear(0.0, 0.0, 10.0, 100.0, 200.0), 100.0);
    assert_eq!(map_linear(10.0, 0.0, 10.0, 100.0, 200.0), 200.0);
    assert_relative_eq!(map_linear(2.5, 0.0, 10.0, 100.0, 200.0), 125.0);
    // Inverted ranges work the same way.
    assert_relative_eq!(map_linear(2.5, 0.0, 10.0, 200.0, 100.0), 175.0);
}

#[test]
fn degenerate_domain_returns_range_min() {
    for value in [f64::MIN, -1.0, 0.0, 3.0, 1e15] {
        assert_eq!(map_linear(value, 3.0, 3.0, 42.0, 420.0), 42.0);
    }
}

#[test]
fn time_mapping_handles_equal_bounds() {
    let t = 1_700_000_000_000;
    assert_eq!(map_time_to_x(t, t, t, 490.0), 0.0);
    assert_relative_eq!(map_time_to_x(t + 500, t, t + 1_000, 490.0), 245.0);
}

#[test]
fn value_mapping_puts_larger_values_higher() {
    let low = map_value_to_y(1000.0, 4000.0, 220.0);
    let high = map_value_to_y(3000.0, 4000.0, 220.0);
    assert!(high < low);
    assert_relative_eq!(low, 165.0);
    assert_relative_eq!(high, 55.0);
}

#[test]
fn layout_maps_into_absolute_canvas_coordinates() {
    let layout = ChartLayout::new(Viewport::new(600, 300), Margins::new(40.0, 40.0, 40.0, 70.0));

    assert_eq!(layout.plot_width(), 490.0);
    assert_eq!(layout.plot_height(), 220.0);
    assert_eq!(layout.plot_right(), 560.0);
    assert_eq!(layout.plot_bottom(), 260.0);
    assert_eq!(layout.center_x(), 300.0);

    assert_eq!(layout.x_for_time(5, 5, 5), 70.0);
    assert_eq!(layout.x_for_time(10, 0, 10), 560.0);
    assert_eq!(layout.y_for_value(0.0, 1000.0), 260.0);
    assert_eq!(layout.y_for_value(1000.0, 1000.0), 40.0);
    assert_eq!(layout.y_for_value(500.0, 1000.0), 150.0);
}

#[test]
fn zero_surface_size_falls_back_per_dimension() {
    let fallback = Viewport::new(600, 300);
    assert_eq!(Viewport::new(0, 0).or_fallback(fallback), fallback);
    assert_eq!(
        Viewport::new(800, 0).or_fallback(fallback),
        Viewport::new(800, 300)
    );
    assert_eq!(
        Viewport::new(800, 450).or_fallback(fallback),
        Viewport::new(800, 450)
    );
}
