//! Spiral timeline chart.
//!
//! Categories are pinned at evenly spaced arc-length intervals along an
//! Archimedean spiral, with a synthetic "Now" marker at the terminal point.

use std::fmt::Write as _;

use crate::api::ChartConfig;
use crate::charts::frame::{ChartBody, ChartFrame, PLOT_HEIGHT};
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{percent, short_time, truncate_label};
use crate::core::geometry::archimedean_spiral;
use crate::render::svg::{escape, num};

const SAMPLES: usize = 360;
const TURNS: f64 = 3.0;
const BASE_RADIUS: f64 = 30.0;
const SPACING_PER_TURN: f64 = 24.0;
const SCALE_X: f64 = 1.3;
const SCALE_Y: f64 = 0.5;
const PIN_HEIGHT: f64 = 85.0;
const MIN_MARKER_RADIUS: f64 = 1.8;
const MAX_MARKER_RADIUS: f64 = 5.2;
/// Segment ends are extended by this much so round caps overlap seamlessly.
const OVERSHOOT: f64 = 0.5;

pub(crate) fn render(dataset: &Dataset, config: &ChartConfig, frame: &ChartFrame) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text_color = &config.text_color;

    let cx = (frame.chart_width + 34.0) / 2.0;
    let cy = frame.chart_top + PLOT_HEIGHT + 60.0;
    let path = archimedean_spiral(
        cx,
        cy,
        SAMPLES,
        TURNS,
        BASE_RADIUS,
        SPACING_PER_TURN,
        SCALE_X,
        SCALE_Y,
    );

    // Marker pins fade toward the background so the spiral stays dominant.
    let marker_color = if background.is_dark() {
        base.darken(60)
    } else {
        base.lighten(60)
    };

    let mut elements = String::new();

    // Per-segment stroke width fakes depth: thicker toward the outer turns
    // and on near-horizontal runs.
    for i in 0..path.len() - 1 {
        let p1 = path[i];
        let p2 = path[i + 1];
        let t = i as f64 / (path.len() - 1) as f64;
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let orientation = dy.atan2(dx).sin().abs();
        let stroke_width = 2.0 + 3.0 * t + 7.5 * orientation;

        let dist = dx.hypot(dy);
        let (ux, uy) = (dx / dist, dy / dist);
        let _ = write!(
            elements,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            num(p1.x - ux * OVERSHOOT),
            num(p1.y - uy * OVERSHOOT),
            num(p2.x + ux * OVERSHOOT),
            num(p2.y + uy * OVERSHOOT),
            base.to_hex(),
            num(stroke_width),
        );
    }

    let mut labels = String::new();
    let step = (SAMPLES as f64 / (dataset.len() + 1) as f64).round() as usize;
    for (i, category) in dataset.categories().iter().enumerate() {
        let Some(point) = path.get(i * step) else {
            continue;
        };
        push_marker(
            &mut elements,
            &mut labels,
            point.x,
            point.y,
            dataset.ratio(i),
            &truncate_label(&category.label, 10),
            Some(category.seconds),
            config,
            marker_color,
            text_color,
        );
    }

    // Terminal marker: where the timeline is "now".
    let last = path[path.len() - 1];
    let now_ratio = if dataset.max() > 0.0 && !dataset.is_empty() {
        dataset.total() / (dataset.max() * dataset.len() as f64)
    } else {
        0.0
    };
    push_marker(
        &mut elements,
        &mut labels,
        last.x,
        last.y,
        now_ratio,
        "Now",
        None,
        config,
        marker_color,
        text_color,
    );

    ChartBody {
        elements: format!("<g>{elements}</g><g>{labels}</g>"),
        height: frame.base_height.max(last.y + 100.0),
    }
}

#[allow(clippy::too_many_arguments)]
fn push_marker(
    elements: &mut String,
    labels: &mut String,
    x: f64,
    y: f64,
    ratio: f64,
    label: &str,
    seconds: Option<f64>,
    config: &ChartConfig,
    marker_color: Rgb,
    text_color: &str,
) {
    let radius = MIN_MARKER_RADIUS + (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS) * ratio;
    let label_y = y - PIN_HEIGHT;

    let _ = write!(
        elements,
        "<circle cx=\"{x}\" cy=\"{y}\" r=\"{r}\" fill=\"#{c}\"/>\
         <line x1=\"{x}\" y1=\"{y}\" x2=\"{x}\" y2=\"{ly}\" stroke=\"#{c}\" stroke-width=\"1.2\"/>",
        x = num(x),
        y = num(y),
        r = num(radius),
        c = marker_color.to_hex(),
        ly = num(label_y),
    );
    let _ = write!(
        labels,
        "<text x=\"{}\" y=\"{}\" font-size=\"9.5\" text-anchor=\"middle\" fill=\"#{text_color}\">{}</text>",
        num(x),
        num(label_y - 8.0),
        escape(label),
    );

    if let Some(seconds) = seconds {
        let mut parts = Vec::new();
        if config.show_time {
            parts.push(short_time(seconds));
        }
        if config.show_percentage {
            parts.push(format!("{}%", percent(ratio)));
        }
        if !parts.is_empty() {
            let _ = write!(
                labels,
                "<text transform=\"rotate(-90, {rx}, {ry})\" x=\"{tx}\" y=\"{ty}\" font-size=\"8.5\" text-anchor=\"end\" fill=\"#{text_color}\">{}</text>",
                escape(&parts.join(" \u{2022} ")),
                rx = num(x + 12.0),
                ry = num(label_y + 12.0),
                tx = num(x + 10.0),
                ty = num(label_y + 10.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChartKind;
    use crate::core::dataset::Category;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Category::new("Mon", 3600.0),
            Category::new("Tue", 7200.0),
            Category::new("Wed", 1800.0),
        ])
        .expect("valid dataset")
    }

    #[test]
    fn renders_one_marker_per_category_plus_now() {
        let config = ChartConfig::new(ChartKind::Spiral);
        let frame = ChartFrame::new(&config, 3);
        let body = render(&dataset(), &config, &frame);
        assert_eq!(body.elements.matches("stroke-width=\"1.2\"").count(), 4);
        assert!(body.elements.contains(">Now<"));
    }

    #[test]
    fn segment_count_matches_the_sample_count() {
        let config = ChartConfig::new(ChartKind::Spiral);
        let frame = ChartFrame::new(&config, 3);
        let body = render(&dataset(), &config, &frame);
        assert_eq!(
            body.elements.matches("stroke-linecap=\"round\"").count(),
            SAMPLES - 1
        );
    }

    #[test]
    fn all_zero_dataset_renders_minimum_markers() {
        let zeros = Dataset::new(vec![Category::new("Mon", 0.0)]).expect("valid dataset");
        let config = ChartConfig::new(ChartKind::Spiral);
        let frame = ChartFrame::new(&config, 1);
        let body = render(&zeros, &config, &frame);
        assert!(body.elements.contains("r=\"1.8\""));
        assert!(!body.elements.contains("NaN"));
    }
}
