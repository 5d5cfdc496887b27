//! Legend block layout.
//!
//! Two styles are shared by the renderers: a swatch grid (dot + label, three
//! columns) and a pill grid (bold label + a value pill whose fill opacity
//! tracks the category's share of the maximum, so dominant categories read
//! as more saturated).

use std::fmt::Write as _;

use crate::core::color::{Rgb, contrasting_text_color, pill_opacity};
use crate::core::format::{percent, short_time, truncate_label};
use crate::render::svg::{escape, num};

pub(crate) const SWATCH_COLS: usize = 3;
pub(crate) const SWATCH_LINE_HEIGHT: f64 = 20.0;
pub(crate) const PILL_COLS: usize = 2;
pub(crate) const PILL_LINE_HEIGHT: f64 = 24.0;
const PILL_COL_WIDTH: f64 = 180.0;
const LABEL_BUDGET: usize = 10;

/// One legend row: a category with its assigned color.
#[derive(Debug, Clone)]
pub(crate) struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub seconds: f64,
}

/// Height of a swatch legend block with `n` entries.
pub(crate) fn swatch_rows_height(n: usize) -> f64 {
    n.div_ceil(SWATCH_COLS) as f64 * SWATCH_LINE_HEIGHT
}

/// Height of a pill legend block with `n` entries.
pub(crate) fn pill_rows_height(n: usize) -> f64 {
    n.div_ceil(PILL_COLS) as f64 * PILL_LINE_HEIGHT
}

/// Three-column dot-and-label grid, horizontally centered across `span`.
pub(crate) fn swatch_legend(
    entries: &[LegendEntry],
    span: f64,
    start_y: f64,
    text_color: &str,
) -> String {
    let longest = entries
        .iter()
        .map(|e| truncate_label(&e.label, LABEL_BUDGET).chars().count())
        .max()
        .unwrap_or(0);
    let col_width = 12.0 + 10.0 + longest as f64 * 6.5 + 10.0;
    let center_offset = (span - SWATCH_COLS as f64 * col_width) / 2.0;

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let x = center_offset + (i % SWATCH_COLS) as f64 * col_width;
        let y = start_y + (i / SWATCH_COLS) as f64 * SWATCH_LINE_HEIGHT;
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"5\" fill=\"#{}\"/><text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"#{text_color}\">{}</text>",
            num(x),
            num(y - 4.0),
            entry.color.to_hex(),
            num(x + 12.0),
            num(y),
            escape(&truncate_label(&entry.label, LABEL_BUDGET)),
        );
    }
    out
}

/// Two-column pill grid: `Label:` followed by a `H:MM (p%)` pill. Every pill
/// shares the width of the longest pill text so columns stay aligned.
pub(crate) fn pill_legend(
    entries: &[LegendEntry],
    max_seconds: f64,
    total_seconds: f64,
    span: f64,
    start_y: f64,
    text_color: &str,
) -> String {
    let text_rgb = Rgb::parse(text_color);
    let pill_texts: Vec<String> = entries
        .iter()
        .map(|e| {
            let share = if total_seconds > 0.0 {
                e.seconds / total_seconds
            } else {
                0.0
            };
            format!("{} ({}%)", short_time(e.seconds), percent(share))
        })
        .collect();
    let pill_width = pill_texts
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(0) as f64
        * 5.0
        + 8.0;
    let center_offset = (span - PILL_COLS as f64 * PILL_COL_WIDTH) / 2.0;

    let mut out = String::new();
    for (i, (entry, pill_text)) in entries.iter().zip(&pill_texts).enumerate() {
        let label = truncate_label(&entry.label, LABEL_BUDGET);
        let x = center_offset + (i % PILL_COLS) as f64 * PILL_COL_WIDTH;
        let y = start_y + (i / PILL_COLS) as f64 * PILL_LINE_HEIGHT;
        let pill_x = x + label.chars().count() as f64 * 12.0 + 12.0;

        // Inverse-emphasis ratio: large categories map near zero, which the
        // inverted pill scale turns into the most opaque fill.
        let emphasis = if entry.seconds > 0.0 && max_seconds > 0.0 {
            0.1 * (max_seconds / (entry.seconds * 800.0))
        } else {
            1.0
        };
        let opacity = pill_opacity(emphasis);
        let pill_text_color = contrasting_text_color(text_rgb, entry.color, opacity);

        let _ = write!(
            out,
            "<text x=\"{x}\" y=\"{y}\" font-size=\"10\" font-weight=\"bold\" fill=\"#{text_color}\">{label}:</text>\
             <rect x=\"{px}\" y=\"{py}\" width=\"{w}\" height=\"14\" rx=\"4\" ry=\"4\" fill=\"#{fill}\" fill-opacity=\"{op}\"/>\
             <text x=\"{tx}\" y=\"{ty}\" font-size=\"9\" text-anchor=\"middle\" fill=\"#{ptc}\">{pt}</text>",
            x = num(x),
            y = num(y),
            label = escape(&label),
            px = num(pill_x),
            py = num(y - 10.0),
            w = num(pill_width),
            fill = entry.color.to_hex(),
            op = num(opacity),
            tx = num(pill_x + pill_width / 2.0),
            ty = num(y + 1.0),
            ptc = pill_text_color.to_hex(),
            pt = escape(pill_text),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(seconds: &[f64]) -> Vec<LegendEntry> {
        seconds
            .iter()
            .enumerate()
            .map(|(i, &s)| LegendEntry {
                label: format!("Lang{i}"),
                color: Rgb::parse("2f80ed"),
                seconds: s,
            })
            .collect()
    }

    #[test]
    fn swatch_grid_wraps_after_three_columns() {
        let markup = swatch_legend(&entries(&[1.0, 2.0, 3.0, 4.0]), 300.0, 100.0, "333333");
        // Fourth entry starts a second row at start_y + 20.
        assert!(markup.contains("y=\"120\""));
        assert_eq!(markup.matches("<circle").count(), 4);
    }

    #[test]
    fn pill_rows_height_counts_two_per_row() {
        assert_eq!(pill_rows_height(4), 48.0);
        assert_eq!(pill_rows_height(5), 72.0);
    }

    #[test]
    fn pill_legend_handles_all_zero_values() {
        let markup = pill_legend(&entries(&[0.0, 0.0]), 0.0, 0.0, 400.0, 100.0, "333333");
        assert!(!markup.contains("NaN"));
        assert!(markup.contains("00:00 (0.0%)"));
    }
}
