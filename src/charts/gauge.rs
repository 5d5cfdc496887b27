//! Speedometer-style gauge card.
//!
//! A fixed-size 180° dial comparing today's activity against a reference
//! pace, with a needle, optional best-day marker, and trend stat lines.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::color::{Rgb, color_ramp};
use crate::core::format::long_time;
use crate::core::geometry::{describe_arc, polar_to_cartesian};
use crate::render::RenderedComponent;
use crate::render::svg::{escape, num};

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 260.0;
const CX: f64 = WIDTH / 2.0;
const CY: f64 = 160.0;
const RADIUS: f64 = 80.0;
const SEGMENTS: usize = 5;
const SEGMENT_SWEEP: f64 = 36.0;
const ARC_STROKE_WIDTH: f64 = 45.0;
const LABEL_RADIUS: f64 = RADIUS + 30.0;
/// The dial reads 100% when today reaches `reference / 0.8`, so the
/// reference pace itself sits at the 80% mark.
const REFERENCE_HEADROOM: f64 = 0.8;

/// Pre-computed activity numbers the gauge visualizes. The caller owns how
/// these are sourced; rendering is pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeStats {
    pub today_seconds: f64,
    pub average_seconds: f64,
    /// Pace the dial is calibrated against (e.g. a leaderboard average or
    /// 80% of the personal best).
    pub reference_seconds: f64,
    #[serde(default)]
    pub best_day_seconds: f64,
    #[serde(default)]
    pub best_day_label: Option<String>,
}

/// Gauge card appearance options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    #[serde(default = "default_base_color")]
    pub base_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    /// Five dial band labels, slowest first.
    #[serde(default = "default_segment_labels")]
    pub segment_labels: Vec<String>,
    /// Marks the personal best on the dial when it fits inside the scale.
    #[serde(default)]
    pub show_best_day: bool,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
            text_color: default_text_color(),
            bg_color: default_bg_color(),
            segment_labels: default_segment_labels(),
            show_best_day: false,
        }
    }
}

impl GaugeConfig {
    #[must_use]
    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = color.into();
        self
    }

    #[must_use]
    pub fn with_segment_labels(mut self, labels: Vec<String>) -> Self {
        self.segment_labels = labels;
        self
    }

    #[must_use]
    pub fn with_best_day_marker(mut self, show: bool) -> Self {
        self.show_best_day = show;
        self
    }
}

/// Renders the gauge as a fixed 300×260 component.
#[must_use]
pub fn render(stats: &GaugeStats, config: &GaugeConfig) -> RenderedComponent {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text_color = &config.text_color;

    let scale_max = if stats.reference_seconds > 0.0 {
        stats.reference_seconds / REFERENCE_HEADROOM
    } else {
        0.0
    };
    let percent = if scale_max > 0.0 {
        (stats.today_seconds / scale_max * 100.0).min(200.0)
    } else {
        0.0
    };
    let percent_change = if stats.average_seconds > 0.0 {
        ((stats.today_seconds - stats.average_seconds) / stats.average_seconds * 100.0).round()
            as i64
    } else {
        0
    };

    let ramp = color_ramp(base, SEGMENTS, background);

    let mut arcs = String::new();
    for (i, stop) in ramp.iter().enumerate() {
        let start = i as f64 * SEGMENT_SWEEP;
        let end = (i + 1) as f64 * SEGMENT_SWEEP;
        let _ = write!(
            arcs,
            "<path d=\"{}\" stroke=\"#{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" fill=\"none\"/>",
            describe_arc(CX, CY, RADIUS, start, end),
            stop.color.to_hex(),
            num(stop.opacity),
            num(ARC_STROKE_WIDTH),
        );
        let label = config.segment_labels.get(i).map_or("", String::as_str);
        let _ = write!(
            arcs,
            "<path id=\"gaugeLabel{i}\" d=\"{}\" fill=\"none\"/>\
             <text font-size=\"10\" fill=\"#{text_color}\"><textPath href=\"#gaugeLabel{i}\" startOffset=\"50%\" text-anchor=\"middle\">{}</textPath></text>",
            describe_arc(CX, CY, LABEL_RADIUS, start, end),
            escape(label),
        );
    }

    // Needle pivots at the dial center; anything past 100% pins at the end
    // of the scale.
    let needle_angle = percent.min(100.0) / 100.0 * 180.0 - 90.0;
    let tip = polar_to_cartesian(CX, CY, RADIUS - 4.0, needle_angle);
    let left = polar_to_cartesian(CX, CY, 4.0, needle_angle + 90.0);
    let right = polar_to_cartesian(CX, CY, 4.0, needle_angle - 90.0);
    let needle_color = base.to_hsl().scale_lightness(0.75).to_rgb();
    let needle = format!(
        "<polygon points=\"{},{} {},{} {},{}\" fill=\"#{c}\"/><circle cx=\"{}\" cy=\"{}\" r=\"4\" fill=\"#{c}\"/>",
        num(left.x),
        num(left.y),
        num(tip.x),
        num(tip.y),
        num(right.x),
        num(right.y),
        num(CX),
        num(CY),
        c = needle_color.to_hex(),
    );

    let mut best_day_marker = String::new();
    if config.show_best_day && stats.best_day_seconds > 0.0 && scale_max > 0.0 {
        let best_percent = stats.best_day_seconds / scale_max * 100.0;
        // A best day beyond the scale has nowhere to point; skip the marker.
        if best_percent <= 100.0 {
            let angle = best_percent / 100.0 * 180.0 - 90.0;
            let segment = ((best_percent / 20.0).floor() as usize).min(SEGMENTS - 1);
            let marker_color = {
                let hsl = ramp[segment].color.to_hsl();
                crate::core::color::Hsl {
                    l: (hsl.l + 15.0).min(95.0),
                    ..hsl
                }
                .to_rgb()
            };
            let inner = polar_to_cartesian(CX, CY, RADIUS - ARC_STROKE_WIDTH / 2.0, angle);
            let outer = polar_to_cartesian(CX, CY, RADIUS + ARC_STROKE_WIDTH / 2.0, angle);
            let flag = polar_to_cartesian(CX, CY, RADIUS - 35.0, angle);
            let _ = write!(
                best_day_marker,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#{c}\" stroke-width=\"2\"/>\
                 <text x=\"{}\" y=\"{}\" font-size=\"12\" font-weight=\"bold\" text-anchor=\"middle\" fill=\"#{c}\">\u{2691}</text>",
                num(inner.x),
                num(inner.y),
                num(outer.x),
                num(outer.y),
                num(flag.x),
                num(flag.y),
                c = marker_color.to_hex(),
            );
        }
    }

    let trend_word = if percent_change >= 0 {
        "increase"
    } else {
        "decrease"
    };
    let delta = format!(
        "<g transform=\"translate({}, {})\">{}<text x=\"20\" y=\"12\" font-size=\"13\" fill=\"#{text_color}\">{}% {trend_word}</text></g>",
        num(WIDTH / 2.0 - 40.0),
        num(CY + 42.0),
        trend_arrow(percent_change >= 0, text_color),
        percent_change.abs(),
    );

    let mut stat_lines = String::new();
    let _ = write!(
        stat_lines,
        "<text x=\"50%\" y=\"{}\" text-anchor=\"middle\" font-size=\"13\" fill=\"#{text_color}\"><tspan font-weight=\"bold\">{}</tspan><tspan font-weight=\"normal\"> Daily Average</tspan></text>",
        num(CY + 70.0),
        long_time(stats.average_seconds),
    );
    if let Some(best_day) = &stats.best_day_label {
        let _ = write!(
            stat_lines,
            "<text x=\"50%\" y=\"{}\" text-anchor=\"middle\" font-size=\"13\" fill=\"#{text_color}\"><tspan font-weight=\"bold\">{}</tspan><tspan font-weight=\"normal\"> Most Active Day</tspan></text>",
            num(CY + 90.0),
            escape(best_day),
        );
    }

    let content = format!(
        "<text x=\"50%\" y=\"22\" text-anchor=\"middle\" font-size=\"14\" fill=\"#{text_color}\"><tspan font-weight=\"bold\">{}</tspan><tspan font-weight=\"normal\"> Today</tspan></text>\
         <g transform=\"rotate(-90, {cx}, {cy})\">{arcs}</g>{needle}{best_day_marker}{delta}{stat_lines}",
        long_time(stats.today_seconds),
        cx = num(CX),
        cy = num(CY),
    );

    RenderedComponent {
        content,
        width: WIDTH,
        height: HEIGHT,
    }
}

/// Inline 14px trend arrow, up for gains and down for losses.
fn trend_arrow(up: bool, color: &str) -> String {
    let (line, chevron) = if up {
        ("12\" y1=\"19\" x2=\"12\" y2=\"5", "5 12 12 5 19 12")
    } else {
        ("12\" y1=\"5\" x2=\"12\" y2=\"19", "19 12 12 19 5 12")
    };
    format!(
        "<svg width=\"14\" height=\"14\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"#{color}\" stroke-width=\"3\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><line x1=\"{line}\"></line><polyline points=\"{chevron}\"></polyline></svg>",
    )
}

fn default_base_color() -> String {
    "2f80ed".to_owned()
}

fn default_text_color() -> String {
    "333333".to_owned()
}

fn default_bg_color() -> String {
    "ffffff".to_owned()
}

fn default_segment_labels() -> Vec<String> {
    ["Poor", "Fair", "Good", "Great", "Excellent"]
        .map(str::to_owned)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> GaugeStats {
        GaugeStats {
            today_seconds: 7200.0,
            average_seconds: 3600.0,
            reference_seconds: 8000.0,
            best_day_seconds: 9000.0,
            best_day_label: Some("Mon Mar 03".to_owned()),
        }
    }

    #[test]
    fn draws_five_dial_segments() {
        let card = render(&stats(), &GaugeConfig::default());
        assert_eq!(card.content.matches("stroke-width=\"45\"").count(), 5);
        assert_eq!(card.content.matches("textPath").count(), 10);
        assert_eq!(card.width, 300.0);
        assert_eq!(card.height, 260.0);
    }

    #[test]
    fn needle_saturates_at_the_end_of_the_scale() {
        let mut stats = stats();
        stats.today_seconds = stats.reference_seconds * 10.0;
        let card = render(&stats, &GaugeConfig::default());
        // Pinned needle points straight right: tip at (cx + 76, cy).
        assert!(card.content.contains("226,160"));
    }

    #[test]
    fn best_day_marker_outside_the_scale_is_dropped() {
        let config = GaugeConfig::default().with_best_day_marker(true);

        let mut inside = stats();
        inside.best_day_seconds = inside.reference_seconds;
        assert!(render(&inside, &config).content.contains("\u{2691}"));

        let mut outside = stats();
        outside.best_day_seconds = outside.reference_seconds * 2.0;
        assert!(!render(&outside, &config).content.contains("\u{2691}"));
    }

    #[test]
    fn zero_average_reports_a_flat_trend() {
        let mut stats = stats();
        stats.average_seconds = 0.0;
        let card = render(&stats, &GaugeConfig::default());
        assert!(card.content.contains("0% increase"));
    }
}
