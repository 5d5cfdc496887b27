//! Deterministic per-category color assignment.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::ChartConfig;
use crate::core::Rgb;

/// Jitter intensity when deriving distinct per-label colors.
const DISTINCT_VARIANCE: f64 = 90.0;
/// Minimum RGB distance from already-assigned colors.
const MIN_DISTANCE: f64 = 60.0;
/// Attempt bound; after this many tries the last candidate is accepted.
/// Termination wins over guaranteed uniqueness.
const MAX_ATTEMPTS: usize = 10;

/// Builds the render RNG: seeded and reproducible when the config carries a
/// seed, freshly drawn otherwise.
pub(crate) fn rng_for(config: &ChartConfig) -> StdRng {
    match config.color_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Insertion-ordered label→color map. For a fixed seed the same label set
/// always produces the same palette.
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    base: Rgb,
    colors: IndexMap<String, Rgb>,
}

impl Palette {
    pub(crate) fn assign<'a, I, R>(labels: I, base: Rgb, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        R: Rng,
    {
        let mut colors: IndexMap<String, Rgb> = IndexMap::new();
        for label in labels {
            let mut candidate = base.vary(DISTINCT_VARIANCE, rng);
            let mut attempts = 1;
            while attempts < MAX_ATTEMPTS
                && colors
                    .values()
                    .any(|&existing| existing.distance(candidate) < MIN_DISTANCE)
            {
                candidate = base.vary(DISTINCT_VARIANCE, rng);
                attempts += 1;
            }
            colors.insert(label.to_owned(), candidate);
        }
        Self { base, colors }
    }

    pub(crate) fn color(&self, label: &str) -> Rgb {
        self.colors.get(label).copied().unwrap_or(self.base)
    }
}

/// Series color for slot `index`: in mixed mode every slot after the first
/// shifts the base away from the background by a growing amount.
pub(crate) fn mixed_color(config: &ChartConfig, index: usize, base: Rgb, background: Rgb) -> Rgb {
    if config.mixed_colors && index > 0 {
        let amount = (20 + index * 10).min(255) as u8;
        base.adjust_for_background(background, amount)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn palette_is_reproducible_for_a_fixed_seed() {
        let base = Rgb::parse("2f80ed");
        let labels = ["Rust", "Python", "Go"];
        let a = Palette::assign(labels, base, &mut StdRng::seed_from_u64(42));
        let b = Palette::assign(labels, base, &mut StdRng::seed_from_u64(42));
        for label in labels {
            assert_eq!(a.color(label), b.color(label));
        }
    }

    #[test]
    fn unknown_label_falls_back_to_the_base() {
        let base = Rgb::parse("2f80ed");
        let palette = Palette::assign(["Rust"], base, &mut StdRng::seed_from_u64(1));
        assert_eq!(palette.color("Zig"), base);
    }

    #[test]
    fn mixed_mode_leaves_the_first_slot_unshifted() {
        let config = ChartConfig::new(crate::api::ChartKind::Bar).with_mixed_colors(true);
        let base = Rgb::parse("2f80ed");
        let bg = Rgb::parse("ffffff");
        assert_eq!(mixed_color(&config, 0, base, bg), base);
        assert_ne!(mixed_color(&config, 1, base, bg), base);
    }
}
