use activity_cards::core::format::{long_time, percent, short_time, truncate_label};
use activity_cards::{Category, Dataset};
use approx::assert_relative_eq;
use proptest::prelude::*;

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(0.0f64..1_000_000.0, 1..16).prop_map(|values| {
        let categories = values
            .into_iter()
            .enumerate()
            .map(|(i, seconds)| Category::new(format!("C{i}"), seconds))
            .collect();
        Dataset::new(categories).expect("non-negative finite values")
    })
}

proptest! {
    #[test]
    fn shares_sum_to_one_or_zero(dataset in dataset_strategy()) {
        let sum: f64 = (0..dataset.len()).map(|i| dataset.share(i)).sum();
        if dataset.total() > 0.0 {
            assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        } else {
            assert_relative_eq!(sum, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn ratios_are_normalized(dataset in dataset_strategy()) {
        for i in 0..dataset.len() {
            let ratio = dataset.ratio(i);
            prop_assert!((0.0..=1.0).contains(&ratio));
            prop_assert!(ratio.is_finite());
        }
    }

    #[test]
    fn top_n_is_sorted_and_bounded(dataset in dataset_strategy(), n in 0usize..20) {
        let top = dataset.top_n(n);
        prop_assert_eq!(top.len(), n.min(dataset.len()));
        for pair in top.categories().windows(2) {
            prop_assert!(pair[0].seconds >= pair[1].seconds);
        }
        // Kept entries account for no more than the full dataset's total.
        prop_assert!(top.total() <= dataset.total() + 1e-6);
    }

    #[test]
    fn negative_and_non_finite_values_are_rejected(seconds in prop::num::f64::ANY) {
        let result = Dataset::new(vec![Category::new("X", seconds)]);
        if seconds.is_finite() && seconds >= 0.0 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn time_formatting_never_panics(seconds in 0.0f64..10_000_000.0) {
        let short = short_time(seconds);
        prop_assert!(!short.is_empty());
        // Long form is empty only below one minute.
        if seconds >= 60.0 {
            prop_assert!(!long_time(seconds).is_empty());
        }
    }

    #[test]
    fn percent_has_one_decimal(share in 0.0f64..1.0) {
        let text = percent(share);
        let (_, decimals) = text.split_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 1);
    }

    #[test]
    fn truncation_respects_the_budget(label in ".{0,40}", budget in 1usize..20) {
        let truncated = truncate_label(&label, budget);
        prop_assert!(truncated.chars().count() <= budget);
        if label.chars().count() <= budget {
            prop_assert_eq!(truncated, label);
        }
    }
}
