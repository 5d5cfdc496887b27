//! Radar (spider) chart.

use std::fmt::Write as _;

use crate::api::ChartConfig;
use crate::charts::frame::{ChartBody, ChartFrame, PLOT_HEIGHT, RADAR_EXTRA};
use crate::charts::legend::{LegendEntry, pill_legend, pill_rows_height};
use crate::charts::palette::{Palette, rng_for};
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{short_time, truncate_label};
use crate::core::geometry::radial_angle;
use crate::render::svg::{escape, num};

const GRID_LEVELS: usize = 4;
/// Vertical offset of the legend block below the radar area.
const LEGEND_Y_OFFSET: f64 = 60.0;

pub(crate) fn render(dataset: &Dataset, config: &ChartConfig, frame: &ChartFrame) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text = Rgb::parse(&config.text_color);
    let text_color = &config.text_color;
    let n = dataset.len();

    let cx = (frame.chart_width + 48.0) / 2.0;
    let cy = frame.chart_top + PLOT_HEIGHT / 2.0 + RADAR_EXTRA / 1.7;
    let radius = PLOT_HEIGHT.min(frame.chart_width) / 0.7;

    // Faint grid color: push the text color toward the background.
    let grid_color = if background.is_dark() {
        text.darken(120)
    } else {
        text.lighten(120)
    };

    let mut elements = String::new();

    for level in 1..=GRID_LEVELS {
        let r = level as f64 / GRID_LEVELS as f64 * radius;
        let mut path = String::new();
        for i in 0..n {
            let angle = radial_angle(i, n);
            let op = if i == 0 { 'M' } else { 'L' };
            let _ = write!(
                path,
                "{op} {} {} ",
                num(cx + r * angle.cos()),
                num(cy + r * angle.sin())
            );
        }
        let _ = write!(
            elements,
            "<path d=\"{}Z\" fill=\"none\" stroke=\"#{}\" stroke-dasharray=\"2,2\" stroke-width=\"0.5\"/>",
            path,
            grid_color.to_hex(),
        );
    }

    for i in 0..n {
        let angle = radial_angle(i, n);
        let _ = write!(
            elements,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#{}\" stroke-width=\"0.5\"/>",
            num(cx),
            num(cy),
            num(cx + radius * angle.cos()),
            num(cy + radius * angle.sin()),
            grid_color.to_hex(),
        );
    }

    let polygon: Vec<String> = (0..n)
        .map(|i| {
            let angle = radial_angle(i, n);
            let r = dataset.ratio(i) * radius;
            format!("{},{}", num(cx + r * angle.cos()), num(cy + r * angle.sin()))
        })
        .collect();
    if !polygon.is_empty() {
        let _ = write!(
            elements,
            "<polygon points=\"{}\" fill=\"#{base}\" fill-opacity=\"0.2\" stroke=\"#{base}\" stroke-width=\"2\"/>",
            polygon.join(" "),
            base = base.to_hex(),
        );
    }

    for (i, category) in dataset.categories().iter().enumerate() {
        let angle = radial_angle(i, n);
        let label_dist = radius + 12.0;
        let _ = write!(
            elements,
            "<text x=\"{}\" y=\"{}\" font-size=\"10\" text-anchor=\"middle\" alignment-baseline=\"middle\" fill=\"#{text_color}\">{}</text>",
            num(cx + label_dist * angle.cos()),
            num(cy + label_dist * angle.sin()),
            escape(&truncate_label(&category.label, 10)),
        );
    }

    if config.show_y_axis {
        elements.push_str(&radial_ticks(dataset.max(), cx, cy, radius, config));
    }

    let mut height = frame.base_height;
    if config.show_legend {
        // Mixed mode assigns each label its own distinct tint; otherwise all
        // pills share the base color.
        let palette = config.mixed_colors.then(|| {
            let mut rng = rng_for(config);
            Palette::assign(
                dataset.categories().iter().map(|c| c.label.as_str()),
                base,
                &mut rng,
            )
        });
        let entries: Vec<LegendEntry> = dataset
            .categories()
            .iter()
            .map(|c| LegendEntry {
                label: c.label.clone(),
                color: palette.as_ref().map_or(base, |p| p.color(&c.label)),
                seconds: c.seconds,
            })
            .collect();
        let start_y = frame.chart_base + RADAR_EXTRA + LEGEND_Y_OFFSET;
        elements.push_str(&pill_legend(
            &entries,
            dataset.max(),
            dataset.total(),
            frame.chart_width + 100.0,
            start_y,
            text_color,
        ));
        let legend_height = pill_rows_height(n) + LEGEND_Y_OFFSET;
        height = frame.chart_base + RADAR_EXTRA + legend_height + 20.0;
    }

    ChartBody { elements, height }
}

/// Radial value ticks along a near-horizontal axis, dot per tick with a
/// rotated time label at the outer ticks (every tick when the axis label is
/// requested).
fn radial_ticks(max_seconds: f64, cx: f64, cy: f64, radius: f64, config: &ChartConfig) -> String {
    let angle = std::f64::consts::PI / 14.0;
    let label_angle_deg = 77.0;
    let text_color = &config.text_color;

    let mut out = String::new();
    for i in 0..=4 {
        let value = max_seconds / 4.0 * i as f64;
        let ratio = if max_seconds > 0.0 {
            value / max_seconds
        } else {
            0.0
        };
        let r = ratio * radius;
        let x = cx + r * angle.cos();
        let y = cy + r * angle.sin();

        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"0.8\" fill=\"#{text_color}\"/>",
            num(x),
            num(y),
        );

        if i > 0 && (config.show_y_axis_label || i == 4) {
            let label_y = y - (18.0 + r * 0.05);
            let label_x = x - 2.0;
            let _ = write!(
                out,
                "<text x=\"{lx}\" y=\"{ly}\" font-size=\"8\" text-anchor=\"start\" transform=\"rotate({deg}, {lx}, {ly})\" fill=\"#{text_color}\">{label}</text>",
                lx = num(label_x),
                ly = num(label_y),
                deg = num(label_angle_deg),
                label = short_time(value),
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChartKind;
    use crate::core::dataset::Category;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Category::new("Mon", 3600.0),
            Category::new("Tue", 1800.0),
            Category::new("Wed", 900.0),
            Category::new("Thu", 2700.0),
        ])
        .expect("valid dataset")
    }

    #[test]
    fn draws_four_grid_levels_and_one_spoke_per_category() {
        let config = ChartConfig::new(ChartKind::Radar).with_legend(false);
        let frame = ChartFrame::new(&config, 4);
        let body = render(&dataset(), &config, &frame);
        assert_eq!(body.elements.matches("stroke-dasharray=\"2,2\"").count(), 4);
        assert_eq!(body.elements.matches("<line").count(), 4);
        assert_eq!(body.elements.matches("<polygon").count(), 1);
    }

    #[test]
    fn legend_extends_the_component_height() {
        let config = ChartConfig::new(ChartKind::Radar);
        let frame = ChartFrame::new(&config, 4);
        let with_legend = render(&dataset(), &config, &frame);

        let config = config.with_legend(false);
        let without = render(&dataset(), &config, &frame);
        assert!(with_legend.height > without.height);
    }

    #[test]
    fn all_zero_dataset_collapses_the_polygon_to_the_center() {
        let zeros = Dataset::new(vec![Category::new("Mon", 0.0), Category::new("Tue", 0.0)])
            .expect("valid dataset");
        let config = ChartConfig::new(ChartKind::Radar).with_legend(false);
        let frame = ChartFrame::new(&config, 2);
        let body = render(&zeros, &config, &frame);
        assert!(!body.elements.contains("NaN"));
    }
}
