//! Shared card layout frame.
//!
//! Every chart variant shares one coordinate frame: a title band at the top,
//! a 60px plot area, and a 60px bottom band for labels and legends. Variant
//! renderers extend the height below the frame as their layout requires.

use crate::api::{ChartConfig, ChartKind};

pub(crate) const TOP_PADDING: f64 = 22.5;
pub(crate) const TITLE_BAND: f64 = 14.0;
pub(crate) const PLOT_HEIGHT: f64 = 60.0;
pub(crate) const BOTTOM_BAND: f64 = 60.0;
pub(crate) const BAR_WIDTH: f64 = 30.0;
pub(crate) const BAR_GAP: f64 = 15.0;
pub(crate) const SLOT_WIDTH: f64 = BAR_WIDTH + BAR_GAP;
pub(crate) const RADAR_EXTRA: f64 = 110.0;
pub(crate) const BUBBLE_TRIM: f64 = 35.0;
pub(crate) const CANVAS_SLACK: f64 = 48.0;
/// Left padding reserved when a y axis or its label is drawn.
pub(crate) const AXIS_PADDING: f64 = 70.0;
/// Breathing padding used instead when no axis is reserved.
pub(crate) const BREATHING_PADDING: f64 = 30.0;

/// Resolved per-render layout values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChartFrame {
    pub kind: ChartKind,
    /// Axis gutter (70 when reserved, otherwise 0).
    pub left_padding: f64,
    /// Breathing gutter (30 when no axis is reserved, otherwise 0).
    pub breathing: f64,
    pub title_height: f64,
    pub chart_top: f64,
    pub chart_base: f64,
    /// Slot-grid width, `categories × 45`.
    pub chart_width: f64,
    /// Frame height before variant-specific extensions.
    pub base_height: f64,
    pub axis: bool,
    pub axis_label: bool,
}

impl ChartFrame {
    pub(crate) fn new(config: &ChartConfig, categories: usize) -> Self {
        let kind = config.kind;
        let supports_axis = matches!(kind, ChartKind::Bar | ChartKind::Line | ChartKind::Area);
        let axis = config.show_y_axis && supports_axis;
        let axis_label = config.show_y_axis_label && supports_axis;

        let left_padding = if axis || axis_label { AXIS_PADDING } else { 0.0 };
        let breathing = if axis || axis_label {
            0.0
        } else {
            BREATHING_PADDING
        };

        let title_height = if config.show_title { TITLE_BAND } else { 0.0 };
        let chart_top = TOP_PADDING + title_height + 10.0;
        let chart_base = chart_top + PLOT_HEIGHT;
        let chart_width = categories as f64 * SLOT_WIDTH;

        let mut base_height = chart_base + BOTTOM_BAND;
        match kind {
            ChartKind::Radar => base_height += RADAR_EXTRA,
            ChartKind::Bubble => base_height -= BUBBLE_TRIM,
            _ => {}
        }

        Self {
            kind,
            left_padding,
            breathing,
            title_height,
            chart_top,
            chart_base,
            chart_width,
            base_height,
            axis,
            axis_label,
        }
    }

    /// Left edge of slot `i`.
    pub(crate) fn slot_x(&self, i: usize) -> f64 {
        i as f64 * SLOT_WIDTH + self.left_padding + self.breathing
    }

    /// Horizontal center of slot `i` (bar midline, line/area point x).
    pub(crate) fn slot_center_x(&self, i: usize) -> f64 {
        self.slot_x(i) + BAR_WIDTH / 2.0
    }

    /// Final component width for the configured minimum.
    pub(crate) fn component_width(&self, min_width: f64) -> f64 {
        let base = self.chart_width.max(min_width) + CANVAS_SLACK;
        if self.kind == ChartKind::Radar {
            base
        } else {
            base + self.left_padding
        }
    }

    /// Anchor for the heading and totals footer.
    pub(crate) fn x_center(&self) -> f64 {
        if self.kind == ChartKind::Radar {
            self.chart_width / 2.0 + 20.0
        } else {
            self.left_padding / 2.0 + self.chart_width / 2.0 + 20.0
        }
    }
}

/// Chart body produced by a variant renderer, before the heading and totals
/// footer are layered on.
#[derive(Debug, Clone)]
pub(crate) struct ChartBody {
    pub elements: String,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_reserves_the_gutter_only_for_axis_kinds() {
        let config = ChartConfig::new(ChartKind::Bar).with_y_axis(true);
        let frame = ChartFrame::new(&config, 7);
        assert_eq!(frame.left_padding, AXIS_PADDING);
        assert_eq!(frame.breathing, 0.0);

        let config = ChartConfig::new(ChartKind::Donut).with_y_axis(true);
        let frame = ChartFrame::new(&config, 7);
        assert_eq!(frame.left_padding, 0.0);
        assert_eq!(frame.breathing, BREATHING_PADDING);
    }

    #[test]
    fn hiding_the_title_collapses_its_band() {
        let shown = ChartFrame::new(&ChartConfig::new(ChartKind::Bar), 7);
        let hidden = ChartFrame::new(&ChartConfig::new(ChartKind::Bar).with_title(false), 7);
        assert_eq!(shown.chart_top - hidden.chart_top, TITLE_BAND);
    }

    #[test]
    fn component_width_honors_the_minimum() {
        let frame = ChartFrame::new(&ChartConfig::new(ChartKind::Bar), 2);
        assert_eq!(frame.component_width(300.0), 300.0 + CANVAS_SLACK);

        let frame = ChartFrame::new(&ChartConfig::new(ChartKind::Bar), 8);
        assert_eq!(frame.component_width(300.0), 8.0 * SLOT_WIDTH + CANVAS_SLACK);
    }
}
