//! Star-rank tier badge.
//!
//! A hex ring of stars on the left showing the current tier, with rank,
//! tier range, and a progress bar toward the next tier on the right.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::render::RenderedComponent;
use crate::render::svg::{escape, num};

const TIER_TITLES: [&str; 7] = [
    "Bronze",
    "Silver",
    "Gold",
    "Platinum",
    "Diamond",
    "Ascendant",
    "Mythic",
];
pub const TOP_TIER: usize = TIER_TITLES.len() - 1;

/// Star slot offsets around the hex ring; the last slot is the center star
/// reserved for the top tier.
const STAR_OFFSETS: [(f64, f64); 7] = [
    (0.0, -32.0),
    (28.0, -16.0),
    (28.0, 16.0),
    (0.0, 32.0),
    (-28.0, 16.0),
    (-28.0, -16.0),
    (0.0, 0.0),
];

/// Five-point star centered on the origin, outer radius 12.
const STAR_PATH: &str = "M 0 -12 L 2.94 -4.05 L 11.41 -3.71 L 4.76 1.55 L 7.05 9.71 L 0 5 L -7.05 9.71 L -4.76 1.55 L -11.41 -3.71 L -2.94 -4.05 Z";

const RING_CX: f64 = 60.0;
const RING_CY: f64 = 40.0;
const STAR_SCALE: f64 = 0.6;
const RHS_X: f64 = 160.0;
const BAR_WIDTH: f64 = 160.0;
const BADGE_HEIGHT: f64 = 120.0;
/// Glow kicks in at Diamond and sharpens per tier above it.
const GLOW_MIN_TIER: usize = 4;

/// Standing data the badge visualizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierStanding {
    pub rank: u64,
    /// Tier index, 0 (Bronze) through 6 (Mythic). Clamped on render.
    pub tier: usize,
    /// Rank range covered by the current tier.
    pub tier_min_rank: u64,
    pub tier_max_rank: u64,
    /// Hours accumulated in the ranking window.
    pub hours: f64,
    /// Hours needed to clear the current tier.
    pub target_hours: f64,
}

/// Tier badge appearance options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(default = "default_star_color")]
    pub star_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            star_color: default_star_color(),
            text_color: default_text_color(),
        }
    }
}

impl TierConfig {
    #[must_use]
    pub fn with_star_color(mut self, color: impl Into<String>) -> Self {
        self.star_color = color.into();
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }
}

/// Renders the badge as a fixed-height component.
#[must_use]
pub fn render(standing: &TierStanding, config: &TierConfig) -> RenderedComponent {
    let tier = standing.tier.min(TOP_TIER);
    let star_color = &config.star_color;
    let text_color = &config.text_color;

    let mut content = String::new();
    if tier >= GLOW_MIN_TIER {
        let _ = write!(
            content,
            "<defs><filter id=\"glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{}\"/></filter></defs>",
            num((tier - GLOW_MIN_TIER + 1) as f64 * 1.5),
        );
    }

    content.push_str("<g>");
    for (i, (dx, dy)) in STAR_OFFSETS.iter().enumerate() {
        // The center star only exists at the top tier.
        if i == TOP_TIER && tier != TOP_TIER {
            continue;
        }
        let star = if i <= tier {
            format!("<path d=\"{STAR_PATH}\" fill=\"#{star_color}\"/>")
        } else {
            format!(
                "<path d=\"{STAR_PATH}\" stroke=\"#{star_color}\" fill=\"none\" stroke-width=\"1\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            )
        };
        let glow = if tier >= GLOW_MIN_TIER {
            " filter=\"url(#glow)\""
        } else {
            ""
        };
        let _ = write!(
            content,
            "<g transform=\"translate({},{}) scale({})\"{glow}>{star}</g>",
            num(RING_CX + dx),
            num(RING_CY + dy),
            num(STAR_SCALE),
        );
    }
    content.push_str("</g>");

    let _ = write!(
        content,
        "<text x=\"67.5\" y=\"110\" font-size=\"15\" text-anchor=\"middle\" fill=\"#{text_color}\">{}</text>",
        TIER_TITLES[tier],
    );

    let progress = if standing.target_hours > 0.0 {
        (standing.hours / standing.target_hours).min(1.0)
    } else {
        0.0
    };
    let _ = write!(
        content,
        "<g>\
         <text x=\"{rhs}\" y=\"30\" fill=\"#{text_color}\"><tspan font-size=\"11\">Rank </tspan><tspan font-size=\"9\">#</tspan><tspan font-size=\"15\" font-weight=\"bold\">{rank}</tspan></text>\
         <text x=\"{rhs}\" y=\"50\" font-size=\"11\" fill=\"#{text_color}\">{title} Tier: <tspan font-size=\"10\">#</tspan>{min}\u{2013}{max}</text>\
         <rect x=\"{rhs}\" y=\"65\" width=\"{bar}\" height=\"8\" fill=\"#ccc\" rx=\"4\"/>\
         <rect x=\"{rhs}\" y=\"65\" width=\"{fill}\" height=\"8\" fill=\"#{text_color}\" rx=\"4\"/>\
         <text x=\"{bar_end}\" y=\"95\" font-size=\"11\" text-anchor=\"end\" fill=\"#{text_color}\">{hours:.1}/{target:.1} hrs</text>\
         </g>",
        rhs = num(RHS_X),
        rank = standing.rank,
        title = escape(TIER_TITLES[tier]),
        min = standing.tier_min_rank,
        max = standing.tier_max_rank,
        bar = num(BAR_WIDTH),
        fill = num(progress * BAR_WIDTH),
        bar_end = num(RHS_X + BAR_WIDTH),
        hours = standing.hours,
        target = standing.target_hours,
    );

    RenderedComponent {
        content,
        width: RHS_X + BAR_WIDTH + 40.0,
        height: BADGE_HEIGHT,
    }
}

fn default_star_color() -> String {
    "f5dd42".to_owned()
}

fn default_text_color() -> String {
    "333333".to_owned()
}
