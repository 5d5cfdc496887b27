use crate::error::{CardError, CardResult};

/// One labeled entry in a chart's dataset: a day, language or project.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: String,
    pub seconds: f64,
}

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>, seconds: f64) -> Self {
        Self {
            label: label.into(),
            seconds,
        }
    }
}

/// Ordered categorical series plus derived aggregates.
///
/// `total` and `max` are fixed at construction; a dataset handed to a
/// renderer is never mutated. Categories keep their given order — the only
/// reordering this crate performs is the explicit [`Dataset::top_n`]
/// preprocessing step.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    categories: Vec<Category>,
    total: f64,
    max: f64,
}

impl Dataset {
    pub fn new(categories: Vec<Category>) -> CardResult<Self> {
        for category in &categories {
            if !category.seconds.is_finite() || category.seconds < 0.0 {
                return Err(CardError::InvalidData(format!(
                    "category `{}` has a negative or non-finite value",
                    category.label
                )));
            }
        }

        let total = categories.iter().map(|c| c.seconds).sum();
        let max = categories.iter().map(|c| c.seconds).fold(0.0, f64::max);

        Ok(Self {
            categories,
            total,
            max,
        })
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Value relative to the maximum, `0.0` for an all-zero dataset.
    #[must_use]
    pub fn ratio(&self, index: usize) -> f64 {
        if self.max > 0.0 {
            self.categories[index].seconds / self.max
        } else {
            0.0
        }
    }

    /// Value share of the total in `[0, 1]`, `0.0` for an all-zero dataset.
    #[must_use]
    pub fn share(&self, index: usize) -> f64 {
        if self.total > 0.0 {
            self.categories[index].seconds / self.total
        } else {
            0.0
        }
    }

    /// Keeps the `n` largest categories, sorted by value descending.
    ///
    /// This is the documented explicit-sort preprocessing step; aggregates
    /// are recomputed for the reduced set.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Self {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| b.seconds.total_cmp(&a.seconds));
        categories.truncate(n);

        let total = categories.iter().map(|c| c.seconds).sum();
        let max = categories.iter().map(|c| c.seconds).fold(0.0, f64::max);

        Self {
            categories,
            total,
            max,
        }
    }
}
