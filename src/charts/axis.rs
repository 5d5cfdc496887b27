//! Y-axis tick and guide generation for bar, line and area charts.

use std::fmt::Write as _;

use crate::api::ChartKind;
use crate::charts::frame::{ChartFrame, PLOT_HEIGHT};
use crate::core::format::short_time;
use crate::render::svg::num;

/// Tick intervals between zero and the maximum (five tick values in total).
const TICK_INTERVALS: usize = 4;

/// Dashed guide lines plus short-time labels for five evenly spaced ticks.
/// Line and area charts inset the guide span by 15px each side so guides do
/// not poke past the first and last data points.
pub(crate) fn y_axis_elements(max_seconds: f64, frame: &ChartFrame, text_color: &str) -> String {
    let inset = if matches!(frame.kind, ChartKind::Line | ChartKind::Area) {
        15.0
    } else {
        0.0
    };
    let tick_start = frame.left_padding + inset;
    let label_x = frame.left_padding - 8.0;
    let axis_end = frame.chart_width + 56.0 - inset;

    let mut lines = String::new();
    let mut labels = String::new();
    for i in 0..=TICK_INTERVALS {
        let value = max_seconds / TICK_INTERVALS as f64 * i as f64;
        let ratio = if max_seconds > 0.0 {
            value / max_seconds
        } else {
            0.0
        };
        let y = frame.chart_base - ratio * PLOT_HEIGHT;

        let _ = write!(
            lines,
            "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"#{text_color}\" stroke-width=\"0.5\" stroke-dasharray=\"2,2\"/>",
            num(tick_start),
            num(axis_end),
            y = num(y),
        );
        let _ = write!(
            labels,
            "<text x=\"{}\" y=\"{}\" font-size=\"9\" text-anchor=\"end\" fill=\"#{text_color}\">{}</text>",
            num(label_x),
            num(y + 3.0),
            short_time(value),
        );
    }

    if frame.axis_label {
        let x = 22.0;
        let y = frame.chart_top + PLOT_HEIGHT / 2.0;
        let _ = write!(
            labels,
            "<text x=\"{x}\" y=\"{y}\" font-size=\"9\" text-anchor=\"middle\" transform=\"rotate(-90, {x}, {y})\" fill=\"#{text_color}\">Time</text>",
            x = num(x),
            y = num(y),
        );
    }

    lines + &labels
}
