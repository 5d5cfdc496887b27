use activity_cards::core::geometry::{
    Point, catmull_rom_to_bezier, curve_path_data, describe_arc, polar_to_cartesian,
    polyline_path_data, radial_angle,
};
use approx::assert_relative_eq;

#[test]
fn polar_angles_walk_clockwise_from_twelve() {
    let top = polar_to_cartesian(100.0, 100.0, 50.0, 0.0);
    assert_relative_eq!(top.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(top.y, 50.0, epsilon = 1e-9);

    let right = polar_to_cartesian(100.0, 100.0, 50.0, 90.0);
    assert_relative_eq!(right.x, 150.0, epsilon = 1e-9);
    assert_relative_eq!(right.y, 100.0, epsilon = 1e-9);

    let bottom = polar_to_cartesian(100.0, 100.0, 50.0, 180.0);
    assert_relative_eq!(bottom.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(bottom.y, 150.0, epsilon = 1e-9);
}

#[test]
fn arc_sets_the_large_flag_past_half_a_turn() {
    let small = describe_arc(0.0, 0.0, 10.0, 0.0, 90.0);
    assert!(small.contains(" 0 0 1 "));

    let large = describe_arc(0.0, 0.0, 10.0, 0.0, 270.0);
    assert!(large.contains(" 0 1 1 "));
}

#[test]
fn arc_endpoints_sit_on_the_circle() {
    let path = describe_arc(150.0, 160.0, 80.0, 0.0, 36.0);
    // Start of a 0° arc in gauge orientation is straight up from the center.
    assert!(path.starts_with("M 150 80 A 80 80 0 0 1 "));
}

#[test]
fn full_sweep_arc_ends_where_it_starts() {
    let start = polar_to_cartesian(150.0, 160.0, 80.0, 0.0);
    let end = polar_to_cartesian(150.0, 160.0, 80.0, 360.0);
    assert_relative_eq!(start.x, end.x, epsilon = 1e-9);
    assert_relative_eq!(start.y, end.y, epsilon = 1e-9);

    let path = describe_arc(150.0, 160.0, 80.0, 0.0, 360.0);
    assert!(path.starts_with("M 150 80 A 80 80 0 1 1 "));
    assert!(path.ends_with("150 80"));
}

#[test]
fn spline_control_points_stay_inside_the_band() {
    let points = vec![
        Point::new(0.0, 100.0),
        Point::new(45.0, 40.0),
        Point::new(90.0, 100.0),
        Point::new(135.0, 40.0),
    ];
    let segments = catmull_rom_to_bezier(&points, 40.0, 100.0);
    assert_eq!(segments.len(), 3);
    for segment in &segments {
        assert!(segment.control1.y >= 40.0 && segment.control1.y <= 100.0);
        assert!(segment.control2.y >= 40.0 && segment.control2.y <= 100.0);
    }
}

#[test]
fn spline_clamp_holds_for_repeated_and_collinear_points() {
    let repeated = vec![
        Point::new(0.0, 60.0),
        Point::new(45.0, 60.0),
        Point::new(45.0, 60.0),
        Point::new(90.0, 120.0),
    ];
    for segment in catmull_rom_to_bezier(&repeated, 60.0, 120.0) {
        assert!(segment.control1.y >= 60.0 && segment.control1.y <= 120.0);
        assert!(segment.control2.y >= 60.0 && segment.control2.y <= 120.0);
    }

    let flat = vec![
        Point::new(0.0, 80.0),
        Point::new(45.0, 80.0),
        Point::new(90.0, 80.0),
        Point::new(135.0, 80.0),
    ];
    for segment in catmull_rom_to_bezier(&flat, 80.0, 80.0) {
        assert_relative_eq!(segment.control1.y, 80.0, epsilon = 1e-12);
        assert_relative_eq!(segment.control2.y, 80.0, epsilon = 1e-12);
    }
}

#[test]
fn spline_passes_through_the_input_points() {
    let points = vec![
        Point::new(0.0, 10.0),
        Point::new(10.0, 20.0),
        Point::new(20.0, 5.0),
    ];
    let segments = catmull_rom_to_bezier(&points, 0.0, 100.0);
    assert_eq!(segments[0].end, points[1]);
    assert_eq!(segments[1].end, points[2]);
}

#[test]
fn degenerate_splines_produce_no_segments() {
    assert!(catmull_rom_to_bezier(&[], 0.0, 1.0).is_empty());
    assert!(catmull_rom_to_bezier(&[Point::new(1.0, 1.0)], 0.0, 1.0).is_empty());
}

#[test]
fn path_data_uses_svg_operators() {
    let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)];
    assert_eq!(polyline_path_data(&points), "M 0 0 L 10 5");

    let segments = catmull_rom_to_bezier(&points, 0.0, 10.0);
    let curve = curve_path_data(points[0], &segments);
    assert!(curve.starts_with("M 0,0 C "));
}

#[test]
fn radial_slots_divide_the_circle_evenly() {
    let n = 5;
    for i in 0..n {
        let step = radial_angle(i + 1, n) - radial_angle(i, n);
        assert_relative_eq!(step, 2.0 * std::f64::consts::PI / n as f64, epsilon = 1e-12);
    }
}
