use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// The closed set of chart variants.
///
/// Dispatch over this enum is exhaustive; an unrecognized kind string is a
/// configuration error at parse time, never a silent fallback at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    BarVertical,
    Line,
    Area,
    Radar,
    Bubble,
    Donut,
    Spiral,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::BarVertical => "bar_vertical",
            Self::Line => "line",
            Self::Area => "area",
            Self::Radar => "radar",
            Self::Bubble => "bubble",
            Self::Donut => "donut",
            Self::Spiral => "spiral",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = CardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "bar" => Ok(Self::Bar),
            "bar_vertical" => Ok(Self::BarVertical),
            "line" => Ok(Self::Line),
            "area" => Ok(Self::Area),
            "radar" => Ok(Self::Radar),
            "bubble" => Ok(Self::Bubble),
            "donut" => Ok(Self::Donut),
            "spiral" => Ok(Self::Spiral),
            other => Err(CardError::UnknownChartKind(other.to_owned())),
        }
    }
}

/// Chart rendering configuration.
///
/// A plain value object: every recognized option and its default is
/// enumerated here once, and the struct is never mutated after construction.
/// Serializable so hosts can persist card setups without inventing their own
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Primary series color, 6 hex digits without `#`.
    #[serde(default = "default_base_color")]
    pub base_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    /// Pre-formatted heading line; the caller decides its wording.
    #[serde(default)]
    pub heading: Option<String>,
    /// Long friendly headings render at 12px instead of 14px.
    #[serde(default)]
    pub long_heading: bool,
    #[serde(default = "default_show")]
    pub show_legend: bool,
    #[serde(default = "default_show")]
    pub show_time: bool,
    #[serde(default = "default_show")]
    pub show_percentage: bool,
    #[serde(default = "default_show")]
    pub show_title: bool,
    #[serde(default = "default_show")]
    pub show_total: bool,
    #[serde(default)]
    pub show_y_axis: bool,
    #[serde(default)]
    pub show_y_axis_label: bool,
    #[serde(default)]
    pub curved_line: bool,
    /// Derive a distinct color per category instead of shading the base.
    #[serde(default)]
    pub mixed_colors: bool,
    /// Lower bound on the rendered card width.
    #[serde(default = "default_min_width")]
    pub min_width: f64,
    /// Keeps only the N largest categories before rendering.
    #[serde(default)]
    pub category_limit: Option<usize>,
    /// Seed for color jitter; fixed seeds make palettes reproducible.
    #[serde(default)]
    pub color_seed: Option<u64>,
}

impl ChartConfig {
    /// Creates a config for `kind` with every option at its default.
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            base_color: default_base_color(),
            text_color: default_text_color(),
            bg_color: default_bg_color(),
            heading: None,
            long_heading: false,
            show_legend: default_show(),
            show_time: default_show(),
            show_percentage: default_show(),
            show_title: default_show(),
            show_total: default_show(),
            show_y_axis: false,
            show_y_axis_label: false,
            curved_line: false,
            mixed_colors: false,
            min_width: default_min_width(),
            category_limit: None,
            color_seed: None,
        }
    }

    #[must_use]
    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = color.into();
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    #[must_use]
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = color.into();
        self
    }

    /// Sets the heading line; `long` switches to the smaller heading font.
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>, long: bool) -> Self {
        self.heading = Some(heading.into());
        self.long_heading = long;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_time_labels(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    #[must_use]
    pub fn with_percentage_labels(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    #[must_use]
    pub fn with_title(mut self, show: bool) -> Self {
        self.show_title = show;
        self
    }

    #[must_use]
    pub fn with_total(mut self, show: bool) -> Self {
        self.show_total = show;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, show: bool) -> Self {
        self.show_y_axis = show;
        self
    }

    #[must_use]
    pub fn with_y_axis_label(mut self, show: bool) -> Self {
        self.show_y_axis_label = show;
        self
    }

    #[must_use]
    pub fn with_curved_line(mut self, curved: bool) -> Self {
        self.curved_line = curved;
        self
    }

    #[must_use]
    pub fn with_mixed_colors(mut self, mixed: bool) -> Self {
        self.mixed_colors = mixed;
        self
    }

    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    #[must_use]
    pub fn with_category_limit(mut self, limit: usize) -> Self {
        self.category_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    /// Serializes to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> CardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CardError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes from JSON.
    pub fn from_json_str(input: &str) -> CardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CardError::InvalidConfig(format!("failed to parse config: {e}")))
    }
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

fn default_show() -> bool {
    true
}

fn default_min_width() -> f64 {
    300.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_from_str() {
        for kind in [
            ChartKind::Bar,
            ChartKind::BarVertical,
            ChartKind::Line,
            ChartKind::Area,
            ChartKind::Radar,
            ChartKind::Bubble,
            ChartKind::Donut,
            ChartKind::Spiral,
        ] {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_a_config_error() {
        let err = "pie".parse::<ChartKind>().unwrap_err();
        assert!(matches!(err, CardError::UnknownChartKind(k) if k == "pie"));
    }

    #[test]
    fn omitted_options_take_documented_defaults() {
        let config = ChartConfig::from_json_str(r#"{"kind":"bar"}"#).unwrap();
        assert_eq!(config, ChartConfig::new(ChartKind::Bar));
        assert!(config.show_legend);
        assert!(!config.show_y_axis);
        assert_eq!(config.base_color, "2f80ed");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ChartConfig::new(ChartKind::Donut)
            .with_base_color("18c39a")
            .with_color_seed(7)
            .with_category_limit(6);
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ChartConfig::from_json_str(&json).unwrap(), config);
    }
}
