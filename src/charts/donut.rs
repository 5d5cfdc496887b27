//! Donut (annular pie) chart.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::api::ChartConfig;
use crate::charts::frame::{ChartBody, ChartFrame, PLOT_HEIGHT};
use crate::charts::legend::{LegendEntry, swatch_legend, swatch_rows_height};
use crate::charts::palette::mixed_color;
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{percent, short_time, truncate_label};
use crate::render::svg::{escape, num};

const OUTER_RADIUS: f64 = 80.0;
const INNER_RADIUS: f64 = 40.0;
const OUTER_LABEL_RADIUS: f64 = OUTER_RADIUS + 16.0;
const TIME_LABEL_RADIUS: f64 = (OUTER_RADIUS + INNER_RADIUS) / 2.0 - 8.0;
const PCT_LABEL_RADIUS: f64 = (OUTER_RADIUS + INNER_RADIUS) / 2.0 + 4.0;
/// Extra height reserved below the ring for the totals footer.
const RING_EXTRA_HEIGHT: f64 = 110.0;

/// Label suppression thresholds. Curved labels on thin slices overlap and
/// become unreadable, so slices below these limits drop their labels rather
/// than reposition them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutTuning {
    /// Minimum share of the total before the outer category label renders.
    pub outer_label_min_share: f64,
    /// Minimum subtended angle (radians) before the inner value labels render.
    pub inner_label_min_angle: f64,
}

impl Default for DonutTuning {
    fn default() -> Self {
        Self {
            outer_label_min_share: 0.05,
            inner_label_min_angle: PI / 10.0,
        }
    }
}

pub(crate) fn render(dataset: &Dataset, config: &ChartConfig, frame: &ChartFrame) -> ChartBody {
    render_with(dataset, config, frame, DonutTuning::default())
}

pub(crate) fn render_with(
    dataset: &Dataset,
    config: &ChartConfig,
    frame: &ChartFrame,
    tuning: DonutTuning,
) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text_color = &config.text_color;

    let cx = (frame.chart_width + 48.0) / 2.0;
    let cy = frame.chart_top + PLOT_HEIGHT + 30.0;

    let mut defs = String::new();
    let mut elements = String::new();
    let mut start_angle = 0.0_f64;

    for (i, category) in dataset.categories().iter().enumerate() {
        // Zero-value slices are skipped entirely, not rendered at zero width.
        if category.seconds == 0.0 {
            continue;
        }

        let share = dataset.share(i);
        let angle = share * 2.0 * PI;
        let end_angle = start_angle + angle;
        let large_arc = u8::from(angle > PI);
        let color = mixed_color(config, i, base, background);

        let (x1, y1) = ring_point(cx, cy, OUTER_RADIUS, start_angle);
        let (x2, y2) = ring_point(cx, cy, OUTER_RADIUS, end_angle);
        let (x3, y3) = ring_point(cx, cy, INNER_RADIUS, end_angle);
        let (x4, y4) = ring_point(cx, cy, INNER_RADIUS, start_angle);

        let _ = write!(
            elements,
            "<path d=\"M {x1} {y1} A {or} {or} 0 {large_arc} 1 {x2} {y2} L {x3} {y3} A {ir} {ir} 0 {large_arc} 0 {x4} {y4} Z\" fill=\"#{}\"/>",
            color.to_hex(),
            x1 = num(x1),
            y1 = num(y1),
            or = num(OUTER_RADIUS),
            x2 = num(x2),
            y2 = num(y2),
            x3 = num(x3),
            y3 = num(y3),
            ir = num(INNER_RADIUS),
            x4 = num(x4),
            y4 = num(y4),
        );

        if share >= tuning.outer_label_min_share {
            let id = format!("dayPath{i}");
            push_arc_def(&mut defs, &id, cx, cy, OUTER_LABEL_RADIUS, start_angle, end_angle, large_arc);
            let _ = write!(
                elements,
                "<text font-size=\"9\" fill=\"#{text_color}\"><textPath href=\"#{id}\" startOffset=\"50%\" text-anchor=\"middle\">{}</textPath></text>",
                escape(&truncate_label(&category.label, 10)),
            );
        }

        if config.show_time && angle >= tuning.inner_label_min_angle {
            let id = format!("timePath{i}");
            push_arc_def(&mut defs, &id, cx, cy, TIME_LABEL_RADIUS, start_angle, end_angle, large_arc);
            let _ = write!(
                elements,
                "<text font-size=\"8\" fill=\"#{text_color}\"><textPath href=\"#{id}\" startOffset=\"50%\" text-anchor=\"middle\">{}</textPath></text>",
                short_time(category.seconds),
            );
        }

        if config.show_percentage && angle >= tuning.inner_label_min_angle {
            let id = format!("pctPath{i}");
            push_arc_def(&mut defs, &id, cx, cy, PCT_LABEL_RADIUS, start_angle, end_angle, large_arc);
            let _ = write!(
                elements,
                "<text font-size=\"8\" fill=\"#{text_color}\"><textPath href=\"#{id}\" startOffset=\"50%\" text-anchor=\"middle\">{}%</textPath></text>",
                percent(share),
            );
        }

        start_angle = end_angle;
    }

    let mut height = frame.base_height + RING_EXTRA_HEIGHT;
    if config.show_legend && !dataset.is_empty() {
        let entries: Vec<LegendEntry> = dataset
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| LegendEntry {
                label: c.label.clone(),
                color: mixed_color(config, i, base, background),
                seconds: c.seconds,
            })
            .collect();
        let start_y = cy + OUTER_LABEL_RADIUS + 24.0;
        elements.push_str(&swatch_legend(
            &entries,
            frame.chart_width + 48.0,
            start_y,
            text_color,
        ));
        height += swatch_rows_height(dataset.len()) + 10.0;
    }

    let body = if defs.is_empty() {
        elements
    } else {
        format!("<defs>{defs}</defs>{elements}")
    };

    ChartBody {
        elements: body,
        height,
    }
}

fn ring_point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

#[allow(clippy::too_many_arguments)]
fn push_arc_def(
    defs: &mut String,
    id: &str,
    cx: f64,
    cy: f64,
    r: f64,
    start_angle: f64,
    end_angle: f64,
    large_arc: u8,
) {
    let (x1, y1) = ring_point(cx, cy, r, start_angle);
    let (x2, y2) = ring_point(cx, cy, r, end_angle);
    let _ = write!(
        defs,
        "<path id=\"{id}\" fill=\"none\" d=\"M {} {} A {r} {r} 0 {large_arc} 1 {} {}\"/>",
        num(x1),
        num(y1),
        num(x2),
        num(y2),
        r = num(r),
    );
}
