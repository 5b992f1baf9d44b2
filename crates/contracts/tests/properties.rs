//! Property-based tests for the calculation and formatting utilities.

use proptest::prelude::*;

use contracts::shared::analytics::{
    calculate_rfm_score, correlation, max, mean, median, min, percentile, standard_deviation,
};
use contracts::shared::format::{format_currency, format_percentage, parse_currency, truncate};

// =============================================================================
// Strategies
// =============================================================================

fn arb_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
}

/// Integer-valued samples keep the correlation arithmetic exact enough.
fn arb_varied_ints() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000i32..1000, 2..64)
        .prop_filter("needs variance", |values| {
            values.iter().any(|value| *value != values[0])
        })
        .prop_map(|values| values.into_iter().map(f64::from).collect())
}

fn arb_quartiles() -> impl Strategy<Value = [f64; 4]> {
    prop::collection::vec(0.0f64..10_000.0, 4).prop_map(|mut bounds| {
        bounds.sort_by(f64::total_cmp);
        [bounds[0], bounds[1], bounds[2], bounds[3]]
    })
}

// =============================================================================
// Statistics
// =============================================================================

proptest! {
    #[test]
    fn median_lies_between_min_and_max(values in arb_values()) {
        let m = median(&values);
        prop_assert!(min(&values) <= m);
        prop_assert!(m <= max(&values));
    }

    #[test]
    fn percentile_extremes_are_min_and_max(values in arb_values()) {
        prop_assert_eq!(percentile(&values, 0.0), min(&values));
        prop_assert_eq!(percentile(&values, 100.0), max(&values));
    }

    #[test]
    fn percentile_is_monotonic_in_p(values in arb_values(), p in 0.0f64..100.0, q in 0.0f64..100.0) {
        let (low, high) = if p <= q { (p, q) } else { (q, p) };
        prop_assert!(percentile(&values, low) <= percentile(&values, high) + 1e-6);
    }

    #[test]
    fn constant_input_has_no_spread(value in -1_000_000.0f64..1_000_000.0, len in 1usize..64) {
        let values = vec![value; len];
        let tolerance = 1e-6 * value.abs().max(1.0);
        prop_assert!(standard_deviation(&values) <= tolerance);
        prop_assert!((mean(&values) - value).abs() <= tolerance);
    }

    #[test]
    fn self_correlation_is_one(values in arb_varied_ints()) {
        prop_assert!((correlation(&values, &values) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_do_not_correlate(values in arb_varied_ints()) {
        let shorter = &values[..values.len() - 1];
        prop_assert_eq!(correlation(&values, shorter), 0.0);
    }

    #[test]
    fn median_leaves_input_order(values in arb_values()) {
        let before = values.clone();
        let _ = median(&values);
        prop_assert_eq!(before, values);
    }
}

// =============================================================================
// RFM scoring
// =============================================================================

proptest! {
    #[test]
    fn rfm_score_is_monotonic(quartiles in arb_quartiles(), a in 0.0f64..12_000.0, b in 0.0f64..12_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let forward = (calculate_rfm_score(low, &quartiles, false), calculate_rfm_score(high, &quartiles, false));
        prop_assert!(forward.0 <= forward.1);

        let reverse = (calculate_rfm_score(low, &quartiles, true), calculate_rfm_score(high, &quartiles, true));
        prop_assert!(reverse.0 >= reverse.1);
    }

    #[test]
    fn rfm_score_stays_in_range(quartiles in arb_quartiles(), value in -100.0f64..20_000.0, reverse in any::<bool>()) {
        let score = calculate_rfm_score(value, &quartiles, reverse);
        prop_assert!((1..=5).contains(&score));
    }
}

// =============================================================================
// Formatting
// =============================================================================

proptest! {
    #[test]
    fn currency_parses_back_within_a_cent(value in -1_000_000_000.0f64..1_000_000_000.0) {
        let formatted = format_currency(value);
        let parsed = parse_currency(&formatted);
        prop_assert!(parsed.is_some(), "unparsable: {}", formatted);
        prop_assert!((parsed.unwrap_or_default() - value).abs() <= 0.005 + 1e-6);
    }

    #[test]
    fn percentage_keeps_value_sign(value in -1000.0f64..1000.0, decimals in 0usize..4) {
        let formatted = format_percentage(value, decimals, false);
        prop_assert!(formatted.ends_with('%'));
        if value > 0.0 {
            prop_assert!(!formatted.starts_with('-'));
        }
    }

    #[test]
    fn truncate_respects_max_len(text in "\\PC{0,80}", max_len in 3usize..60) {
        let truncated = truncate(&text, max_len);
        prop_assert!(truncated.chars().count() <= max_len);
        if text.chars().count() <= max_len {
            prop_assert_eq!(truncated, text);
        }
    }
}
