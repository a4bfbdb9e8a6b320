use super::*;

// ============================================================================
// bar_layout
// ============================================================================

#[test]
fn tallest_bar_fills_the_chart_height() {
    let rects = bar_layout(&[2.0, 8.0, 4.0], 300.0, 150.0);
    assert_eq!(rects.len(), 3);
    assert!((rects[1].height - 150.0).abs() < 1e-9);
    assert!((rects[1].y).abs() < 1e-9);
    assert!((rects[0].height - 37.5).abs() < 1e-9);
}

#[test]
fn bars_share_the_width_evenly() {
    let rects = bar_layout(&[1.0, 1.0, 1.0, 1.0], 400.0, 100.0);
    for (i, rect) in rects.iter().enumerate() {
        assert!((rect.x - (i as f64 * 100.0 + 10.0)).abs() < 1e-9);
        assert!((rect.width - 80.0).abs() < 1e-9);
    }
}

#[test]
fn all_zero_values_produce_flat_bars() {
    let rects = bar_layout(&[0.0, 0.0], 200.0, 100.0);
    assert!(rects.iter().all(|r| r.height == 0.0 && r.y == 100.0));
}

#[test]
fn empty_input_yields_no_bars() {
    assert!(bar_layout(&[], 200.0, 100.0).is_empty());
}

// ============================================================================
// polyline_points
// ============================================================================

#[test]
fn points_span_the_width_and_scale_to_max() {
    let points = polyline_points(&[0.0, 5.0, 10.0], 10.0, 200.0, 100.0);
    assert_eq!(points, "0.0,100.0 100.0,50.0 200.0,0.0");
}

#[test]
fn single_point_sits_at_the_origin_column() {
    let points = polyline_points(&[3.0], 3.0, 200.0, 100.0);
    assert_eq!(points, "0.0,0.0");
}

#[test]
fn zero_max_pins_the_line_to_the_baseline() {
    let points = polyline_points(&[0.0, 0.0], 0.0, 100.0, 50.0);
    assert_eq!(points, "0.0,50.0 100.0,50.0");
}

// ============================================================================
// donut_segments
// ============================================================================

#[test]
fn segments_cover_the_full_circle() {
    let segments = donut_segments(&[1.0, 1.0, 2.0]);
    assert!((segments[0].0).abs() < 1e-9);
    assert!((segments[0].1 - 0.25).abs() < 1e-9);
    assert!((segments[1].0 - 0.25).abs() < 1e-9);
    assert!((segments[2].0 - 0.5).abs() < 1e-9);
    let total: f64 = segments.iter().map(|(_, len)| len).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn non_positive_values_collapse_to_empty_segments() {
    let segments = donut_segments(&[0.0, -2.0]);
    assert_eq!(segments, vec![(0.0, 0.0), (0.0, 0.0)]);

    let mixed = donut_segments(&[0.0, 4.0]);
    assert_eq!(mixed[0].1, 0.0);
    assert!((mixed[1].1 - 1.0).abs() < 1e-9);
}
