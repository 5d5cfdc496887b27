//! Chart variant renderers and the kind dispatcher.
//!
//! Each variant module turns a [`Dataset`] into a [`ChartBody`] inside the
//! shared [`ChartFrame`]; [`render`] picks the variant, layers the heading
//! and totals footer on top and sizes the final component.

use std::fmt::Write as _;

use crate::api::{ChartConfig, ChartKind};
use crate::core::dataset::Dataset;
use crate::core::format::long_time;
use crate::error::{CardError, CardResult};
use crate::render::RenderedComponent;
use crate::render::svg::{escape, num};

pub(crate) mod axis;
pub(crate) mod frame;
pub(crate) mod legend;
pub(crate) mod palette;

mod bar;
mod bar_vertical;
mod bubble;
mod donut;
mod line;
mod radar;
mod spiral;

pub mod gauge;
pub mod tier;

pub use donut::DonutTuning;
pub use gauge::{GaugeConfig, GaugeStats};
pub use tier::{TOP_TIER, TierConfig, TierStanding};

use frame::{ChartBody, ChartFrame, TOP_PADDING};

const ERROR_FRAGMENT_HEIGHT: f64 = 40.0;
const FALLBACK_WIDTH: f64 = 300.0;

/// Renders one chart component.
///
/// Total by design: a renderer failure is logged and replaced with a small
/// warning fragment so one bad chart never aborts a composed card.
#[must_use]
pub fn render(dataset: &Dataset, config: &ChartConfig) -> RenderedComponent {
    match try_render(dataset, config) {
        Ok(component) => component,
        Err(error) => {
            tracing::warn!(kind = %config.kind, %error, "chart render failed");
            error_fragment(&error, config)
        }
    }
}

/// Renders a donut chart with explicit label-suppression thresholds.
pub fn render_donut_tuned(
    dataset: &Dataset,
    config: &ChartConfig,
    tuning: DonutTuning,
) -> RenderedComponent {
    let mut config = config.clone();
    config.kind = ChartKind::Donut;
    match validate(&config) {
        Ok(()) => {
            let limited = limit(dataset, &config);
            let frame = ChartFrame::new(&config, limited.len());
            let body = donut::render_with(&limited, &config, &frame, tuning);
            finish(&limited, &config, &frame, body)
        }
        Err(error) => {
            tracing::warn!(kind = %config.kind, %error, "chart render failed");
            error_fragment(&error, &config)
        }
    }
}

fn try_render(dataset: &Dataset, config: &ChartConfig) -> CardResult<RenderedComponent> {
    validate(config)?;

    let limited = limit(dataset, config);
    let frame = ChartFrame::new(config, limited.len());
    tracing::debug!(
        kind = %config.kind,
        categories = limited.len(),
        chart_width = frame.chart_width,
        "rendering chart"
    );

    let body = match config.kind {
        ChartKind::Bar => bar::render(&limited, config, &frame),
        ChartKind::BarVertical => bar_vertical::render(&limited, config, &frame),
        ChartKind::Line | ChartKind::Area => line::render(&limited, config, &frame),
        ChartKind::Radar => radar::render(&limited, config, &frame),
        ChartKind::Bubble => {
            let mut rng = palette::rng_for(config);
            bubble::render(&limited, config, &frame, &mut rng)
        }
        ChartKind::Donut => donut::render(&limited, config, &frame),
        ChartKind::Spiral => spiral::render(&limited, config, &frame),
    };

    Ok(finish(&limited, config, &frame, body))
}

fn validate(config: &ChartConfig) -> CardResult<()> {
    if !config.min_width.is_finite() || config.min_width < 0.0 {
        return Err(CardError::InvalidConfig(format!(
            "min_width must be a non-negative number, got {}",
            config.min_width
        )));
    }
    Ok(())
}

fn limit(dataset: &Dataset, config: &ChartConfig) -> Dataset {
    match config.category_limit {
        Some(n) if n < dataset.len() => dataset.top_n(n),
        _ => dataset.clone(),
    }
}

/// Layers the heading and totals footer over the chart body and sizes the
/// component.
fn finish(
    dataset: &Dataset,
    config: &ChartConfig,
    frame: &ChartFrame,
    body: ChartBody,
) -> RenderedComponent {
    let text_color = &config.text_color;
    let x_center = frame.x_center();

    let mut content = String::new();
    if config.show_title {
        if let Some(heading) = &config.heading {
            let font_size = if config.long_heading { 12 } else { 14 };
            let _ = write!(
                content,
                "<text x=\"{}\" y=\"{}\" font-size=\"{font_size}\" font-weight=\"bold\" text-anchor=\"middle\" fill=\"#{text_color}\">{}</text>",
                num(x_center),
                num(TOP_PADDING),
                escape(heading),
            );
        }
    }
    content.push_str(&body.elements);

    let total_text = long_time(dataset.total());
    if config.show_total && !total_text.is_empty() {
        let _ = write!(
            content,
            "<text x=\"{}\" y=\"{}\" font-size=\"12\" text-anchor=\"middle\" fill=\"#{text_color}\"><tspan font-weight=\"bold\">Total:</tspan> {total_text}</text>",
            num(x_center),
            num(body.height - 10.0),
        );
    }

    RenderedComponent {
        content,
        width: frame.component_width(config.min_width),
        height: body.height,
    }
}

fn error_fragment(error: &CardError, config: &ChartConfig) -> RenderedComponent {
    let width = if config.min_width.is_finite() && config.min_width > 0.0 {
        config.min_width
    } else {
        FALLBACK_WIDTH
    };
    RenderedComponent {
        content: format!(
            "<text x=\"10\" y=\"25\" font-size=\"12\" fill=\"#cc3333\">\u{26a0} {}</text>",
            escape(&error.to_string()),
        ),
        width,
        height: ERROR_FRAGMENT_HEIGHT,
    }
}
