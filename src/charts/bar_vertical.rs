//! Horizontal bar rows (the `bar_vertical` kind: one row per category).

use std::fmt::Write as _;

use crate::api::ChartConfig;
use crate::charts::frame::{ChartBody, ChartFrame};
use crate::charts::palette::mixed_color;
use crate::core::Rgb;
use crate::core::dataset::Dataset;
use crate::core::format::{percent, short_time, truncate_label};
use crate::render::svg::{escape, num};

const ROW_HEIGHT: f64 = 24.0;
const BAR_HEIGHT: f64 = 12.0;
/// Horizontal room reserved for the label column and trailing value text.
const VALUE_GUTTER: f64 = 110.0;
/// Label column width; bars start at this offset.
const LABEL_COLUMN: f64 = 75.0;

pub(crate) fn render(dataset: &Dataset, config: &ChartConfig, frame: &ChartFrame) -> ChartBody {
    let base = Rgb::parse(&config.base_color);
    let background = Rgb::parse(&config.bg_color);
    let text_color = &config.text_color;

    let bar_max_width = (frame.chart_width - frame.left_padding - VALUE_GUTTER).max(0.0);
    let bar_start = LABEL_COLUMN + frame.left_padding;

    let mut elements = String::new();
    for (i, category) in dataset.categories().iter().enumerate() {
        let bar_width = dataset.ratio(i) * bar_max_width;
        let y = frame.chart_top + i as f64 * ROW_HEIGHT;
        let fill = mixed_color(config, i, base, background);

        let _ = write!(
            elements,
            "<text x=\"{}\" y=\"{}\" font-size=\"10\" text-anchor=\"end\" fill=\"#{text_color}\">{}</text>\
             <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#{}\" rx=\"2\" ry=\"2\"/>",
            num(bar_start - 8.0),
            num(y + 9.0),
            escape(&truncate_label(&category.label, 10)),
            num(bar_start),
            num(y),
            num(bar_width),
            num(BAR_HEIGHT),
            fill.to_hex(),
        );

        let value_text = match (config.show_time, config.show_percentage) {
            (true, true) => Some(format!(
                "{}    |    {}%",
                short_time(category.seconds),
                percent(dataset.share(i))
            )),
            (true, false) => Some(short_time(category.seconds)),
            (false, true) => Some(format!("{}%", percent(dataset.share(i)))),
            (false, false) => None,
        };
        if let Some(text) = value_text {
            let _ = write!(
                elements,
                "<text x=\"{}\" y=\"{}\" font-size=\"9\" fill=\"#{text_color}\">{}</text>",
                num(bar_start + bar_width + 6.0),
                num(y + 9.0),
                escape(&text),
            );
        }
    }

    ChartBody {
        elements,
        height: dataset.len() as f64 * ROW_HEIGHT + frame.chart_top + 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChartKind;
    use crate::core::dataset::Category;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Category::new("Rust", 7200.0),
            Category::new("TypeScript 4", 3600.0),
        ])
        .expect("valid dataset")
    }

    #[test]
    fn height_grows_with_row_count() {
        let config = ChartConfig::new(ChartKind::BarVertical);
        let frame = ChartFrame::new(&config, 2);
        let body = render(&dataset(), &config, &frame);
        assert_eq!(body.height, 2.0 * ROW_HEIGHT + frame.chart_top + 30.0);
    }

    #[test]
    fn both_labels_are_joined_with_a_separator() {
        let config = ChartConfig::new(ChartKind::BarVertical);
        let frame = ChartFrame::new(&config, 2);
        let body = render(&dataset(), &config, &frame);
        assert!(body.elements.contains("02:00    |    66.7%"));
    }

    #[test]
    fn long_labels_are_truncated_with_an_ellipsis() {
        let config = ChartConfig::new(ChartKind::BarVertical);
        let frame = ChartFrame::new(&config, 2);
        let body = render(&dataset(), &config, &frame);
        assert!(body.elements.contains("TypeScrip\u{2026}"));
    }
}
