//! Property tests for the routing classifier

use desk_classifier::classify;
use desk_classifier::scorer::profit_loss_signal;
use desk_core::{ClassificationInput, Label, Route};
use proptest::prelude::*;

fn any_labels() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(Label::ALL.to_vec(), 0..=Label::ALL.len())
        .prop_map(|labels| labels.iter().map(|l| l.as_str().to_string()).collect())
}

/// Finite magnitudes from tiny to near f64::MAX, either sign
fn magnitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e7f64..1e7,
        (-1f64..1.0, 0i32..=308).prop_map(|(m, e)| m * 10f64.powi(e)),
        Just(f64::MAX),
        Just(1e299),
    ]
}

fn any_input() -> impl Strategy<Value = ClassificationInput> {
    (
        any::<f64>(),
        magnitude(),
        magnitude(),
        -5f64..20.0,
        any::<bool>(),
        any::<bool>(),
        any_labels(),
    )
        .prop_map(|(recency, profit, loss, size, heavy, burst, labels)| {
            ClassificationInput::new(profit, loss, size)
                .with_recency_weight(recency)
                .with_heavy_trader(heavy)
                .with_order_burst(burst)
                .with_labels(labels)
        })
}

proptest! {
    #[test]
    fn rating_is_always_within_scale(input in any_input()) {
        let result = classify(&input);
        prop_assert!((1..=5).contains(&result.rating));
        prop_assert!(result.score.is_finite());
    }

    #[test]
    fn rating_survives_non_finite_magnitudes(
        profit in any::<f64>(),
        loss in any::<f64>(),
        size in any::<f64>(),
    ) {
        let result = classify(&ClassificationInput::new(profit, loss, size));
        prop_assert!((1..=5).contains(&result.rating));
        prop_assert!(result.score.is_finite());
        prop_assert!(result.attribution.iter().all(|c| c.weight.is_finite()));
    }

    #[test]
    fn external_route_iff_both_gates(input in any_input()) {
        let result = classify(&input);
        let profit = input.max_profit.max(0.0);
        let loss = input.max_loss.max(0.0);
        let expected = result.rating > 3 && profit > loss;
        prop_assert_eq!(result.route == Route::ABook, expected);
    }

    #[test]
    fn classification_is_idempotent(input in any_input()) {
        prop_assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn more_profit_never_lowers_shape_signal(
        profit in 0f64..1e7,
        extra in 0f64..1e7,
        loss in 0f64..1e7,
    ) {
        let before = profit_loss_signal(profit, loss);
        let after = profit_loss_signal(profit + extra, loss);
        prop_assert!(after >= before - 1e-12, "{} -> {}", before, after);
    }
}
