//! Geometry primitives shared by the chart renderers.
//!
//! Everything here is a pure function over pixel-space coordinates; path
//! strings use SVG path-data syntax.

use std::f64::consts::PI;

use crate::render::svg::num;

/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts gauge/radar-style polar coordinates to cartesian.
///
/// The angle is measured in degrees clockwise from 12 o'clock, hence the
/// -90° offset against the usual mathematical convention.
#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point::new(cx + r * rad.cos(), cy + r * rad.sin())
}

/// SVG path data for a circular arc from `start_angle` to `end_angle`
/// (degrees, gauge orientation). Sweep is always clockwise; the large-arc
/// flag is set when more than half the circle is swept.
#[must_use]
pub fn describe_arc(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let start = polar_to_cartesian(cx, cy, r, start_angle);
    let end = polar_to_cartesian(cx, cy, r, end_angle);
    let large_arc = u8::from((end_angle - start_angle).abs() > 180.0);
    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        num(start.x),
        num(start.y),
        num(r),
        num(r),
        large_arc,
        num(end.x),
        num(end.y)
    )
}

/// One cubic Bézier segment of a fitted curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Fits a Catmull-Rom spline through `points` and converts it to cubic
/// Bézier segments. Control-point Y values are clamped to `[min_y, max_y]`
/// so the curve never overshoots the vertical plot area; this clamp is a
/// correctness requirement, not cosmetic.
#[must_use]
pub fn catmull_rom_to_bezier(points: &[Point], min_y: f64, max_y: f64) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let p0 = if i == 0 { points[i] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points.get(i + 2).copied().unwrap_or(p2);

        let control1 = Point::new(
            p1.x + (p2.x - p0.x) / 6.0,
            (p1.y + (p2.y - p0.y) / 6.0).clamp(min_y, max_y),
        );
        let control2 = Point::new(
            p2.x - (p3.x - p1.x) / 6.0,
            (p2.y - (p3.y - p1.y) / 6.0).clamp(min_y, max_y),
        );

        segments.push(CubicSegment {
            control1,
            control2,
            end: p2,
        });
    }
    segments
}

/// Path data for a fitted curve: `M start C c1 c2 end ...`.
#[must_use]
pub fn curve_path_data(start: Point, segments: &[CubicSegment]) -> String {
    let mut path = format!("M {},{}", num(start.x), num(start.y));
    for segment in segments {
        path.push_str(&format!(
            " C {},{} {},{} {},{}",
            num(segment.control1.x),
            num(segment.control1.y),
            num(segment.control2.x),
            num(segment.control2.y),
            num(segment.end.x),
            num(segment.end.y)
        ));
    }
    path
}

/// Path data for straight polyline segments: `M x y L x y ...`.
#[must_use]
pub fn polyline_path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let op = if i == 0 { 'M' } else { 'L' };
            format!("{op} {} {}", num(p.x), num(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Angle in radians for slot `i` of `n` radially distributed points,
/// starting at 12 o'clock and proceeding clockwise.
#[must_use]
pub fn radial_angle(i: usize, n: usize) -> f64 {
    let step = 2.0 * PI / n as f64;
    i as f64 * step - PI / 2.0
}

/// Samples an Archimedean spiral (radius grows linearly with swept angle)
/// centered on `(cx, cy)`, squashed by independent X/Y scale factors.
#[must_use]
pub fn archimedean_spiral(
    cx: f64,
    cy: f64,
    samples: usize,
    turns: f64,
    base_radius: f64,
    spacing_per_turn: f64,
    scale_x: f64,
    scale_y: f64,
) -> Vec<Point> {
    let angle_increment = 2.0 * PI * turns / samples as f64;
    (0..samples)
        .map(|i| {
            let angle = i as f64 * angle_increment;
            let radius = base_radius + spacing_per_turn * angle / (2.0 * PI);
            Point::new(
                cx + radius * angle.cos() * scale_x,
                cy + radius * angle.sin() * scale_y,
            )
        })
        .collect()
}
