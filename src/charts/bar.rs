//! Vertical bar chart.

use std::fmt::Write as _;

use crate::api::ChartConfig;
use crate::charts::axis::y_axis_elements;
use crate::charts::frame::{BAR_WIDTH, ChartBody, ChartFrame, PLOT_HEIGHT};
use crate::charts::palette::mixed_color;
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{percent, short_time, truncate_label};
use crate::render::svg::{escape, num};

/// Height of the sliver drawn for a true-zero value, so the category's
/// label column stays legible.
pub(crate) const ZERO_SLIVER: f64 = 1.5;

pub(crate) fn render(dataset: &Dataset, config: &ChartConfig, frame: &ChartFrame) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text_color = &config.text_color;

    let mut elements = String::new();
    if frame.axis {
        elements.push_str(&y_axis_elements(dataset.max(), frame, text_color));
    }

    for (i, category) in dataset.categories().iter().enumerate() {
        let mut bar_height = dataset.ratio(i) * PLOT_HEIGHT;
        if bar_height == 0.0 && category.seconds == 0.0 {
            bar_height = ZERO_SLIVER;
        }
        let x = frame.slot_x(i);
        let y = frame.chart_base - bar_height;
        let fill = mixed_color(config, i, base, background);

        let _ = write!(
            elements,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#{}\" rx=\"3\" ry=\"3\"/>",
            num(x),
            num(y),
            num(BAR_WIDTH),
            num(bar_height),
            fill.to_hex(),
        );

        let center = frame.slot_center_x(i);
        if config.show_time {
            let _ = write!(
                elements,
                "<text x=\"{}\" y=\"{}\" font-size=\"9\" text-anchor=\"middle\" fill=\"#{text_color}\">{}</text>",
                num(center),
                num(y - 4.0),
                short_time(category.seconds),
            );
        }
        let _ = write!(
            elements,
            "<text x=\"{}\" y=\"{}\" font-weight=\"bold\" font-size=\"10\" text-anchor=\"middle\" fill=\"#{text_color}\">{}</text>",
            num(center),
            num(frame.chart_base + 12.0),
            escape(&truncate_label(&category.label, 10)),
        );
        if config.show_percentage {
            let _ = write!(
                elements,
                "<text x=\"{}\" y=\"{}\" font-size=\"9\" text-anchor=\"middle\" fill=\"#{text_color}\">{}%</text>",
                num(center),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChartKind;
    use crate::core::dataset::Category;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Category::new("Mon", 0.0),
            Category::new("Tue", 3600.0),
            Category::new("Wed", 7200.0),
        ])
        .expect("valid dataset")
    }

    #[test]
    fn heights_follow_the_ratio_to_max() {
        let config = ChartConfig::new(ChartKind::Bar);
        let frame = ChartFrame::new(&config, 3);
        let body = render(&dataset(), &config, &frame);
        // 0 renders the sliver; 3600/7200 is half the plot; 7200 is full.
        assert!(body.elements.contains("height=\"1.5\""));
        assert!(body.elements.contains("height=\"30\""));
        assert!(body.elements.contains("height=\"60\""));
    }

    #[test]
    fn percentages_cover_the_total() {
        let config = ChartConfig::new(ChartKind::Bar);
        let frame = ChartFrame::new(&config, 3);
        let body = render(&dataset(), &config, &frame);
        assert!(body.elements.contains(">0.0%<"));
        assert!(body.elements.contains(">33.3%<"));
        assert!(body.elements.contains(">66.7%<"));
    }

    #[test]
    fn hidden_labels_are_omitted() {
        let config = ChartConfig::new(ChartKind::Bar)
            .with_time_labels(false)
            .with_percentage_labels(false);
        let frame = ChartFrame::new(&config, 3);
        let body = render(&dataset(), &config, &frame);
        assert!(!body.elements.contains('%'));
        assert!(!body.elements.contains("01:00"));
    }
}
