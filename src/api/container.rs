use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::svg::{escape, num, strip_svg_wrapper};
use crate::render::{Document, RenderedComponent};

/// Minimum container canvas width.
pub const MIN_CANVAS_WIDTH: f64 = 350.0;
/// Vertical gap between stacked components.
const COMPONENT_SPACING: f64 = 20.0;
/// Unscaled header band height.
const BASE_TITLE_HEIGHT: f64 = 40.0;
/// Extra clearance between the header band and the first component.
const TITLE_PADDING_BOTTOM: f64 = 10.0;
/// Scale applied to the inlined logo's native 400×400 box.
const LOGO_SCALE: f64 = 0.075;
const LOGO_NATIVE_SIZE: f64 = 400.0;

/// Container composition configuration.
///
/// Same shape discipline as [`super::ChartConfig`]: one documented default
/// per option, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_border_radius")]
    pub border_radius: f64,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_show_header")]
    pub show_header: bool,
    /// Inline logo markup (the inner elements of a 400×400 drawing). The
    /// composer never touches the filesystem; hosts inline their own asset.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_logo_color")]
    pub logo_color: String,
    #[serde(default = "default_title_color")]
    pub title_color: String,
    #[serde(default)]
    pub title_prefix: String,
    /// Uniformly rescale every component to the canvas width.
    #[serde(default)]
    pub uniform_scale: bool,
    /// Header scale; also multiplied by `canvas / 350` at compose time.
    #[serde(default)]
    pub title_scale: Option<f64>,
    /// Per-slot scale overrides, keyed by component index. An override wins
    /// outright over `uniform_scale` for that slot.
    #[serde(default)]
    pub slot_scales: IndexMap<usize, f64>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            border_color: default_border_color(),
            border_width: default_border_width(),
            border_radius: default_border_radius(),
            bg_color: default_bg_color(),
            font_family: default_font_family(),
            show_header: default_show_header(),
            logo: None,
            logo_color: default_logo_color(),
            title_color: default_title_color(),
            title_prefix: String::new(),
            uniform_scale: false,
            title_scale: None,
            slot_scales: IndexMap::new(),
        }
    }
}

impl ContainerConfig {
    #[must_use]
    pub fn with_border(mut self, color: impl Into<String>, width: f64, radius: f64) -> Self {
        self.border_color = color.into();
        self.border_width = width;
        self.border_radius = radius;
        self
    }

    #[must_use]
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = color.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    #[must_use]
    pub fn with_logo(mut self, markup: impl Into<String>) -> Self {
        self.logo = Some(markup.into());
        self
    }

    #[must_use]
    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_uniform_scale(mut self, uniform: bool) -> Self {
        self.uniform_scale = uniform;
        self
    }

    #[must_use]
    pub fn with_title_scale(mut self, scale: f64) -> Self {
        self.title_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_slot_scale(mut self, slot: usize, scale: f64) -> Self {
        self.slot_scales.insert(slot, scale);
        self
    }
}

/// Stacks rendered components into one bordered, self-contained document.
///
/// The composer only uses the generic `{content, width, height}` contract;
/// it never inspects which renderer produced a fragment.
#[must_use]
pub fn compose(components: &[RenderedComponent], config: &ContainerConfig) -> Document {
    let canvas_width = components
        .iter()
        .map(|c| c.width)
        .fold(MIN_CANVAS_WIDTH, f64::max);

    let header = if config.show_header {
        header_block(config, canvas_width)
    } else {
        String::new()
    };
    let header_height = if config.show_header {
        BASE_TITLE_HEIGHT * config.title_scale.unwrap_or(1.0)
    } else {
        0.0
    };

    let mut y = header_height
        + if config.show_header {
            COMPONENT_SPACING + TITLE_PADDING_BOTTOM
        } else {
            TITLE_PADDING_BOTTOM
        };

    let mut body = String::new();
    for (slot, component) in components.iter().enumerate() {
        let scale = match config.slot_scales.get(&slot) {
            Some(&override_scale) => override_scale,
            None if config.uniform_scale && component.width > 0.0 => {
                canvas_width / component.width
            }
            None => 1.0,
        };
        let scaled_width = component.width * scale;
        let offset_x = (canvas_width - scaled_width) / 2.0;
        let _ = write!(
            body,
            "<g transform=\"translate({}, {}) scale({})\">{}</g>",
            num(offset_x),
            num(y),
            num(scale),
            strip_svg_wrapper(&component.content)
        );
        y += component.height * scale + COMPONENT_SPACING;
    }

    let total_height = y;
    let border = format!(
        "<rect x=\"{inset}\" y=\"{inset}\" width=\"{w}\" height=\"{h}\" fill=\"#{bg}\" stroke=\"{stroke}\" stroke-width=\"{bw}\" rx=\"{r}\" ry=\"{r}\"/>",
        inset = num(config.border_width / 2.0),
        w = num(canvas_width - config.border_width),
        h = num(total_height - config.border_width),
        bg = config.bg_color,
        stroke = if config.border_width > 0.0 {
            format!("#{}", config.border_color)
        } else {
            "none".to_owned()
        },
        bw = num(config.border_width),
        r = num(config.border_radius),
    );

    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" style=\"font-family:{ff},sans-serif;\">{border}{header}{body}</svg>",
        w = num(canvas_width),
        h = num(total_height),
        ff = escape(&config.font_family),
    );

    Document {
        svg,
        width: canvas_width,
        height: total_height,
    }
}

fn header_block(config: &ContainerConfig, canvas_width: f64) -> String {
    let title_text = format!("{} Stats", config.title_prefix);
    let title_text = title_text.trim();
    let effective_scale = config
        .title_scale
        .map_or(1.0, |s| s * (canvas_width / MIN_CANVAS_WIDTH));

    let logo = config.logo.as_deref().map_or_else(String::new, |markup| {
        format!(
            "<g transform=\"scale({})\" style=\"color:#{}\">{}</g>",
            num(LOGO_SCALE),
            config.logo_color,
            markup
        )
    });

    format!(
        "<g transform=\"translate(20, 20) scale({scale})\">{logo}<text x=\"{text_x}\" y=\"{text_y}\" fill=\"#{color}\" font-size=\"16\" font-family=\"{ff}\">{title}</text></g>",
        scale = num(effective_scale),
        text_x = num(LOGO_NATIVE_SIZE * LOGO_SCALE),
        text_y = num(LOGO_NATIVE_SIZE * LOGO_SCALE / 2.0),
        color = config.title_color,
        ff = escape(&config.font_family),
        title = escape(title_text),
    )
}

fn default_border_color() -> String {
    "333333".to_owned()
}

fn default_border_width() -> f64 {
    1.0
}

fn default_border_radius() -> f64 {
    4.0
}

fn default_bg_color() -> String {
    "ffffff".to_owned()
}

fn default_font_family() -> String {
    "Calibri".to_owned()
}

fn default_show_header() -> bool {
    true
}

fn default_logo_color() -> String {
    "000000".to_owned()
}

fn default_title_color() -> String {
    "333333".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(width: f64, height: f64) -> RenderedComponent {
        RenderedComponent::new("<rect/>", width, height)
    }

    #[test]
    fn empty_json_object_yields_the_documented_defaults() {
        let config: ContainerConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, ContainerConfig::default());
        assert_eq!(config.border_color, "333333");
        assert_eq!(config.border_width, 1.0);
        assert_eq!(config.border_radius, 4.0);
        assert_eq!(config.bg_color, "ffffff");
        assert_eq!(config.font_family, "Calibri");
        assert!(config.show_header);
        assert_eq!(config.logo_color, "000000");
        assert_eq!(config.title_color, "333333");
    }

    #[test]
    fn canvas_width_has_a_floor() {
        let doc = compose(&[component(200.0, 100.0)], &ContainerConfig::default());
        assert_eq!(doc.width, MIN_CANVAS_WIDTH);

        let doc = compose(&[component(500.0, 100.0)], &ContainerConfig::default());
        assert_eq!(doc.width, 500.0);
    }

    #[test]
    fn slot_override_beats_uniform_scaling() {
        let config = ContainerConfig::default()
            .with_header(false)
            .with_uniform_scale(true)
            .with_slot_scale(0, 0.5);
        let doc = compose(&[component(350.0, 100.0), component(350.0, 100.0)], &config);
        // Slot 0 keeps its explicit 0.5; slot 1 scales uniformly (1.0 here).
        assert!(doc.svg.contains("scale(0.5)"));
        assert!(doc.svg.contains("scale(1)"));
    }

    #[test]
    fn components_stack_with_fixed_spacing() {
        let config = ContainerConfig::default().with_header(false);
        let doc = compose(&[component(350.0, 100.0), component(350.0, 60.0)], &config);
        // 10 lead-in + 100 + 20 + 60 + 20 trailing gap.
        assert_eq!(doc.height, 210.0);
        assert!(doc.svg.contains("translate(0, 10)"));
        assert!(doc.svg.contains("translate(0, 130)"));
    }

    #[test]
    fn zero_border_width_renders_no_stroke() {
        let config = ContainerConfig::default().with_border("333333", 0.0, 4.0);
        let doc = compose(&[component(350.0, 50.0)], &config);
        assert!(doc.svg.contains("stroke=\"none\""));
    }
}
