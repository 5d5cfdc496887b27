//! Packed bubble chart.

use std::fmt::Write as _;

use rand::Rng;

use crate::api::ChartConfig;
use crate::charts::frame::{ChartBody, ChartFrame};
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{percent, short_time, truncate_label};
use crate::core::pack::{PackedCircle, pack_siblings};
use crate::render::svg::{escape, num};

/// Clearance between packed circles.
const PACK_PADDING: f64 = 2.0;
/// Pack box aspect: height is this fraction of the width.
const PACK_ASPECT: f64 = 0.75;
/// The packed extent may exceed the plot band by this much before the whole
/// layout is scaled down to fit.
pub(crate) const OVERFLOW_ALLOWANCE: f64 = 220.0;
const BUBBLE_Y_OFFSET: f64 = 25.0;
/// Jitter variance for per-bubble tinting.
const TINT_VARIANCE: f64 = 30.0;

const LEGEND_COLS: usize = 2;
const LEGEND_COL_WIDTH: f64 = 190.0;
const LEGEND_LINE_HEIGHT: f64 = 20.0;
const LEGEND_Y_OFFSET: f64 = 40.0;

pub(crate) fn render<R: Rng>(
    dataset: &Dataset,
    config: &ChartConfig,
    frame: &ChartFrame,
    rng: &mut R,
) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let text_color = &config.text_color;

    if dataset.is_empty() {
        return ChartBody {
            elements: String::new(),
            height: frame.base_height,
        };
    }

    // Pack largest-first with radii proportional to the square root of the
    // value, then fit the layout into a width × 0.75·width box.
    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.sort_by(|&a, &b| {
        dataset.categories()[b]
            .seconds
            .total_cmp(&dataset.categories()[a].seconds)
    });
    let radii: Vec<f64> = order
        .iter()
        .map(|&i| dataset.categories()[i].seconds.sqrt())
        .collect();

    let box_width = frame.chart_width.max(240.0);
    let box_height = box_width * PACK_ASPECT;
    let mut leaves = pack_siblings(&radii, PACK_PADDING);
    if let Some(enclosure) = crate::core::pack::enclose(
        &leaves
            .iter()
            .map(|c| PackedCircle::new(c.x, c.y, c.r + PACK_PADDING / 2.0))
            .collect::<Vec<_>>(),
    ) {
        let k = if enclosure.r > 0.0 {
            box_width.min(box_height) / (2.0 * enclosure.r)
        } else {
            1.0
        };
        for leaf in &mut leaves {
            leaf.x = box_width / 2.0 + leaf.x * k;
            leaf.y = box_height / 2.0 + leaf.y * k + BUBBLE_Y_OFFSET;
            leaf.r *= k;
        }
    }

    // Scale down uniformly when the packed extent overflows the budget.
    let budget = frame.chart_base - frame.chart_top + OVERFLOW_ALLOWANCE;
    let mut max_y = leaves.iter().map(|l| l.y + l.r).fold(0.0, f64::max);
    if max_y > budget {
        let scale = budget / max_y;
        for leaf in &mut leaves {
            leaf.y = frame.chart_top + (leaf.y - frame.chart_top) * scale;
            leaf.r *= scale;
        }
        max_y = leaves.iter().map(|l| l.y + l.r).fold(0.0, f64::max);
    }

    // Recenter horizontally on the card.
    let min_x = leaves.iter().map(|l| l.x - l.r).fold(f64::INFINITY, f64::min);
    let max_x = leaves
        .iter()
        .map(|l| l.x + l.r)
        .fold(f64::NEG_INFINITY, f64::max);
    let x_offset = (frame.chart_width + 48.0) / 2.0 - (min_x + max_x) / 2.0;

    let tints: Vec<Rgb> = leaves
        .iter()
        .map(|_| base.vary(TINT_VARIANCE, rng))
        .collect();

    let mut circles = String::new();
    for (leaf, tint) in leaves.iter().zip(&tints) {
        let _ = write!(
            circles,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#{}\" fill-opacity=\"0.85\"/>",
            num(leaf.x),
            num(leaf.y),
            num(leaf.r),
            tint.to_hex(),
        );
    }
    let mut elements = format!("<g transform=\"translate({}, 0)\">{circles}</g>", num(x_offset));

    let mut height = max_y + 20.0;
    if config.show_legend {
        let center_offset = (frame.chart_width + 100.0 - LEGEND_COLS as f64 * LEGEND_COL_WIDTH) / 2.0;
        for (i, (&dataset_index, tint)) in order.iter().zip(&tints).enumerate() {
            let category = &dataset.categories()[dataset_index];
            let x = center_offset + (i % LEGEND_COLS) as f64 * LEGEND_COL_WIDTH;
            let y = max_y + 30.0 + (i / LEGEND_COLS) as f64 * LEGEND_LINE_HEIGHT;
            let _ = write!(
                elements,
                "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"#{}\"/>\
                 <text x=\"{}\" y=\"{}\" font-size=\"10\" font-weight=\"bold\" fill=\"#{text_color}\">{}:</text>\
                 <text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"#{text_color}\">{} ({}%)</text>",
                num(x + 12.0),
                num(y),
                tint.to_hex(),
                num(x + 24.0),
                num(y + 3.0),
                escape(&truncate_label(&category.label, 10)),
                num(x + 24.0 + 70.0),
                num(y + 3.0),
                short_time(category.seconds),
                percent(dataset.share(dataset_index)),
            );
        }
        height += dataset.len().div_ceil(LEGEND_COLS) as f64 * LEGEND_LINE_HEIGHT + LEGEND_Y_OFFSET;
    }

    ChartBody { elements, height }
}
