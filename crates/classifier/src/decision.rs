//! Routing decision engine
//!
//! Fixed two-gate policy for the base book plus two independent overlays.
//! Overlays never move the base route.

use desk_core::{Label, Route};

use crate::normalizer::NormalizedInput;

/// A-Book requires a rating strictly above this
pub const A_BOOK_RATING_THRESHOLD: u8 = 3;

/// Typical size (lots) from which heavy or bursty flow prefers MM-Stream
pub const MARKET_MAKING_MIN_LOTS: f64 = 3.0;

/// Base route and overlay flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDecision {
    pub route: Route,
    pub needs_monitor: bool,
    pub prefer_market_making: bool,
}

/// A-Book iff rating > 3 AND biggest profit > biggest loss
pub fn base_route(rating: u8, max_profit: f64, max_loss: f64) -> Route {
    if rating > A_BOOK_RATING_THRESHOLD && max_profit > max_loss {
        Route::ABook
    } else {
        Route::BBook
    }
}

pub fn is_onboarding(input: &NormalizedInput) -> bool {
    input.labels.iter().any(Label::is_onboarding)
}

pub fn is_compliance_flagged(input: &NormalizedInput) -> bool {
    input.labels.iter().any(Label::is_compliance)
}

/// Monitor overlay: onboarding or compliance labels
pub fn needs_monitor(input: &NormalizedInput) -> bool {
    is_onboarding(input) || is_compliance_flagged(input)
}

/// MM-Stream preference: heavy with large size, or a burst from heavy or
/// large-size flow. Advisory only.
pub fn prefers_market_making(input: &NormalizedInput) -> bool {
    let large_size = input.avg_position_size >= MARKET_MAKING_MIN_LOTS;
    let large_size_label = input.has_any(&[Label::Trade3To6Lots, Label::Trade6PlusLots]);

    let heavy_and_large = input.is_heavy_trader && (large_size || large_size_label);
    let bursting = input.has_order_burst && (input.is_heavy_trader || large_size);

    heavy_and_large || bursting
}

pub fn decide(input: &NormalizedInput, rating: u8) -> RoutingDecision {
    RoutingDecision {
        route: base_route(rating, input.max_profit, input.max_loss),
        needs_monitor: needs_monitor(input),
        prefer_market_making: prefers_market_making(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use desk_core::ClassificationInput;

    fn normalized(input: ClassificationInput) -> NormalizedInput {
        normalize(&input)
    }

    #[test]
    fn test_base_route_truth_table() {
        for rating in 1..=5u8 {
            for (profit, loss) in [(900.0, 500.0), (500.0, 900.0), (700.0, 700.0)] {
                let expected = if rating > 3 && profit > loss {
                    Route::ABook
                } else {
                    Route::BBook
                };
                assert_eq!(
                    base_route(rating, profit, loss),
                    expected,
                    "rating {} profit {} loss {}",
                    rating,
                    profit,
                    loss
                );
            }
        }
    }

    #[test]
    fn test_high_rating_alone_never_routes_external() {
        assert_eq!(base_route(5, 500.0, 900.0), Route::BBook);
    }

    #[test]
    fn test_favourable_profit_alone_never_routes_external() {
        assert_eq!(base_route(3, 10_000.0, 1.0), Route::BBook);
        assert_eq!(base_route(1, 10_000.0, 1.0), Route::BBook);
    }

    #[test]
    fn test_monitor_overlay_labels() {
        for label in ["new account", "delay trade activation", "AML", "abnormal funding", "CEO flagged"] {
            let input = normalized(ClassificationInput::default().with_labels([label]));
            assert!(needs_monitor(&input), "{} should add Monitor", label);
        }

        let input = normalized(ClassificationInput::default().with_labels(["martingale", "hedger"]));
        assert!(!needs_monitor(&input));
    }

    #[test]
    fn test_heavy_with_large_size_prefers_mm() {
        let input = normalized(ClassificationInput::new(0.0, 0.0, 4.0).with_heavy_trader(true));
        assert!(prefers_market_making(&input));
    }

    #[test]
    fn test_heavy_with_size_label_prefers_mm() {
        let input = normalized(
            ClassificationInput::new(0.0, 0.0, 0.5)
                .with_heavy_trader(true)
                .with_labels(["trade 6+ lots per position"]),
        );
        assert!(prefers_market_making(&input));
    }

    #[test]
    fn test_burst_needs_heavy_or_large_size() {
        let small = normalized(ClassificationInput::new(0.0, 0.0, 1.0).with_order_burst(true));
        assert!(!prefers_market_making(&small));

        let large = normalized(ClassificationInput::new(0.0, 0.0, 3.0).with_order_burst(true));
        assert!(prefers_market_making(&large));

        let heavy = normalized(
            ClassificationInput::new(0.0, 0.0, 0.1)
                .with_order_burst(true)
                .with_heavy_trader(true),
        );
        assert!(prefers_market_making(&heavy));
    }

    #[test]
    fn test_burst_ignores_size_label() {
        let input = normalized(
            ClassificationInput::new(0.0, 0.0, 0.5)
                .with_order_burst(true)
                .with_labels(["trade 3-6 lots per position"]),
        );
        assert!(!prefers_market_making(&input));
    }

    #[test]
    fn test_heavy_small_size_does_not_prefer_mm() {
        let input = normalized(ClassificationInput::new(0.0, 0.0, 2.5).with_heavy_trader(true));
        assert!(!prefers_market_making(&input));
    }
}
