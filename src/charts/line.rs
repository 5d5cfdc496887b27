//! Line and area charts over the slot grid.

use std::fmt::Write as _;

use crate::api::{ChartConfig, ChartKind};
use crate::charts::axis::y_axis_elements;
use crate::charts::frame::{ChartBody, ChartFrame, PLOT_HEIGHT};
use crate::charts::palette::mixed_color;
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{percent, short_time, truncate_label};
use crate::core::geometry::{Point, catmull_rom_to_bezier, curve_path_data, polyline_path_data};
use crate::render::svg::{escape, num};

pub(crate) fn render(dataset: &Dataset, config: &ChartConfig, frame: &ChartFrame) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text_color = &config.text_color;
    let area = config.kind == ChartKind::Area;

    let points: Vec<Point> = dataset
        .categories()
        .iter()
        .enumerate()
        .map(|(i, _)| {
            Point::new(
                frame.slot_center_x(i),
                frame.chart_base - dataset.ratio(i) * PLOT_HEIGHT,
            )
        })
        .collect();

    let line_path = if config.curved_line && points.len() > 1 {
        let segments = catmull_rom_to_bezier(&points, frame.chart_base - PLOT_HEIGHT, frame.chart_base);
        curve_path_data(points[0], &segments)
    } else {
        polyline_path_data(&points)
    };

    let mut elements = String::new();
    if frame.axis {
        elements.push_str(&y_axis_elements(dataset.max(), frame, text_color));
    }

    if !points.is_empty() {
        if area {
            let last = points[points.len() - 1];
            let first = points[0];
            let area_path = format!(
                "{line_path} L {} {} L {} {} Z",
                num(last.x),
                num(frame.chart_base),
                num(first.x),
                num(frame.chart_base),
            );
            let _ = write!(
                elements,
                "<path d=\"{area_path}\" fill=\"#{}\" fill-opacity=\"0.2\"/>",
                base.to_hex(),
            );
        }
        let _ = write!(
            elements,
            "<path d=\"{line_path}\" fill=\"none\" stroke=\"#{}\" stroke-width=\"2\"/>",
            base.to_hex(),
        );
    }

    for (i, point) in points.iter().enumerate() {
        let fill = mixed_color(config, i, base, background);
        let _ = write!(
            elements,
            "<circle cx=\"{}\" cy=\"{}\" r=\"2.5\" fill=\"#{}\"/>",
            num(point.x),
            num(point.y),
            fill.to_hex(),
        );
    }

    for (i, category) in dataset.categories().iter().enumerate() {
        let point = points[i];
        if config.show_time {
            let _ = write!(
                elements,
                "<text x=\"{}\" y=\"{}\" font-size=\"9\" text-anchor=\"middle\" fill=\"#{text_color}\" fill-opacity=\"0.8\">{}</text>",
                num(point.x),
                num(point.y - 6.0),
                short_time(category.seconds),
            );
        }
        let _ = write!(
            elements,
            "<text x=\"{}\" y=\"{}\" font-weight=\"bold\" font-size=\"10\" text-anchor=\"middle\" fill=\"#{text_color}\" fill-opacity=\"0.7\">{}</text>",
            num(point.x),
            num(frame.chart_base + 12.0),
            escape(&truncate_label(&category.label, 10)),
        );
        if config.show_percentage {
            let _ = write!(
                elements,
                "<text x=\"{}\" y=\"{}\" font-size=\"9\" text-anchor=\"middle\" fill=\"#{text_color}\" fill-opacity=\"0.6\">{}%</text>",
                num(point.x),
                num(frame.chart_base + 24.0),
                percent(dataset.share(i)),
            );
        }
    }

    ChartBody {
        elements,
        height: frame.base_height,
    }
}
