//! Color math for card rendering.
//!
//! Hex colors travel through the crate as 6-digit lowercase strings without a
//! leading `#` (fragments interpolate their own `#`). Parsing is total:
//! malformed input degrades to black and is logged, because a single bad
//! color must never fail an entire card render.

use rand::Rng;
use tracing::warn;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a 6-digit hex color, with or without a leading `#`.
    ///
    /// Never fails: anything else degrades to black with a warning.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let cleaned = input.trim().trim_start_matches('#');
        if cleaned.len() == 6 && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
            let r = u8::from_str_radix(&cleaned[0..2], 16).unwrap_or(0);
            let g = u8::from_str_radix(&cleaned[2..4], 16).unwrap_or(0);
            let b = u8::from_str_radix(&cleaned[4..6], 16).unwrap_or(0);
            return Self { r, g, b };
        }
        warn!(input, "malformed hex color, falling back to black");
        Self::BLACK
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness, YIQ-weighted 299/587/114 over 1000.
    #[must_use]
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self.brightness() < 128.0
    }

    #[must_use]
    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    #[must_use]
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    /// Lightens on a dark background, darkens on a light one, so derived
    /// colors stay visible either way.
    #[must_use]
    pub fn adjust_for_background(self, background: Self, amount: u8) -> Self {
        if background.is_dark() {
            self.lighten(amount)
        } else {
            self.darken(amount)
        }
    }

    /// Euclidean distance in RGB space.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Random per-channel jitter of at most `variance / 2` intensity units
    /// in either direction. Zero variance returns the color unchanged.
    #[must_use]
    pub fn vary<R: Rng>(self, variance: f64, rng: &mut R) -> Self {
        let mut jitter = |channel: u8| {
            let offset = ((rng.r#gen::<f64>() - 0.5) * variance).floor();
            (f64::from(channel) + offset).clamp(0.0, 255.0) as u8
        };
        Self {
            r: jitter(self.r),
            g: jitter(self.g),
            b: jitter(self.b),
        }
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Hsl {
            h: h * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

/// HSL color with `h` in degrees and `s`/`l` in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f64| {
            let k = (n + self.h / 30.0) % 12.0;
            let c = l - a * (-1.0f64).max((k - 3.0).min((9.0 - k).min(1.0)));
            (255.0 * c).round() as u8
        };
        Rgb::new(f(0.0), f(8.0), f(4.0))
    }

    /// Multiplies lightness by `factor`, e.g. `0.75` for the gauge needle.
    #[must_use]
    pub fn scale_lightness(self, factor: f64) -> Self {
        Self {
            l: (self.l * factor).clamp(0.0, 100.0),
            ..self
        }
    }
}

/// Picks a readable variant of `text` for rendering over `fill` at the given
/// opacity: a dim fill keeps more of the text's intensity than a bright one.
#[must_use]
pub fn contrasting_text_color(text: Rgb, fill: Rgb, opacity: f64) -> Rgb {
    let effective = (f64::from(fill.r) * 299.0
        + f64::from(fill.g) * 587.0
        + f64::from(fill.b) * 114.0)
        / 100.0
        * opacity;

    let factor = if effective < 128.0 { 0.25 } else { 0.01 };
    let scale = |channel: u8| ((f64::from(channel) * factor).round()).clamp(0.0, 255.0) as u8;
    Rgb::new(scale(text.r), scale(text.g), scale(text.b))
}

/// Fill opacity for legend pills, mapped from a clamped `[0, 1]` ratio onto
/// `[0.25, 0.08]` (higher ratio fades the pill toward the background) and
/// rounded to two decimals so output is byte-stable.
#[must_use]
pub fn pill_opacity(ratio: f64) -> f64 {
    const MIN: f64 = 0.08;
    const MAX: f64 = 0.25;
    let clamped = ratio.clamp(0.0, 1.0);
    ((MAX - clamped * (MAX - MIN)) * 100.0).round() / 100.0
}

/// One stop of the gauge color ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct RampStop {
    pub color: Rgb,
    pub opacity: f64,
}

/// Builds an `count`-stop ramp of the base hue with lightness shifting by up
/// to 20 points (direction chosen from the background) and opacity climbing
/// from 0.1 to 1.0.
#[must_use]
pub fn color_ramp(base: Rgb, count: usize, background: Rgb) -> Vec<RampStop> {
    const LIGHTNESS_DELTA: f64 = 20.0;
    const OPACITY_START: f64 = 0.1;
    const OPACITY_END: f64 = 1.0;

    let base_hsl = base.to_hsl();
    let dark_background = background.to_hsl().l < 50.0;

    let (start_l, end_l) = if dark_background {
        ((base_hsl.l - LIGHTNESS_DELTA).max(0.0), base_hsl.l)
    } else {
        (base_hsl.l, (base_hsl.l - LIGHTNESS_DELTA).max(0.0))
    };

    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            let l = (start_l + (end_l - start_l) * t).round();
            let opacity =
                ((OPACITY_START + (OPACITY_END - OPACITY_START) * t) * 100.0).round() / 100.0;
            RampStop {
                color: Hsl { l, ..base_hsl }.to_rgb(),
                opacity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_accepts_hash_prefix_and_whitespace() {
        assert_eq!(Rgb::parse(" #3b82f6 "), Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(Rgb::parse("3b82f6"), Rgb::new(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn parse_degrades_to_black() {
        assert_eq!(Rgb::parse("not-a-color"), Rgb::BLACK);
        assert_eq!(Rgb::parse("fff"), Rgb::BLACK);
        assert_eq!(Rgb::parse(""), Rgb::BLACK);
    }

    #[test]
    fn zero_variance_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = Rgb::parse("4f8cc9");
        assert_eq!(base.vary(0.0, &mut rng), base);
    }

    #[test]
    fn brightness_classifies_black_and_white() {
        assert!(Rgb::BLACK.is_dark());
        assert!(!Rgb::new(255, 255, 255).is_dark());
    }
}
