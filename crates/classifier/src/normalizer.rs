//! Input normalization
//!
//! Coerces a raw [`ClassificationInput`] into the bounded domain the scorer
//! works on. Nothing is rejected: out-of-range numbers are clamped and
//! strings outside the label vocabulary are dropped.

use desk_core::{ClassificationInput, DEFAULT_RECENCY_WEIGHT, Label, Lots};
use log::{debug, warn};
use std::collections::BTreeSet;

pub const MIN_RECENCY_WEIGHT: f64 = 0.3;
pub const MAX_RECENCY_WEIGHT: f64 = 0.9;

/// Classification input after clamping and label filtering
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    /// Within [0.3, 0.9]
    pub recency_weight: f64,
    /// Finite and non-negative
    pub max_profit: f64,
    /// Finite and non-negative
    pub max_loss: f64,
    /// Finite and non-negative
    pub avg_position_size: Lots,
    pub is_heavy_trader: bool,
    pub has_order_burst: bool,
    /// Known labels only, deduplicated
    pub labels: BTreeSet<Label>,
}

impl NormalizedInput {
    pub fn has(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    pub fn has_any(&self, labels: &[Label]) -> bool {
        labels.iter().any(|label| self.has(*label))
    }
}

/// Normalize raw input. Never fails.
pub fn normalize(input: &ClassificationInput) -> NormalizedInput {
    let mut labels = BTreeSet::new();
    for raw in &input.labels {
        match Label::parse(raw) {
            Some(label) => {
                labels.insert(label);
            }
            None => debug!("Ignoring unknown label '{}'", raw),
        }
    }

    NormalizedInput {
        recency_weight: recency_weight(input.recency_weight),
        max_profit: magnitude("maxProfit", input.max_profit),
        max_loss: magnitude("maxLoss", input.max_loss),
        avg_position_size: magnitude("avgPositionSize", input.avg_position_size),
        is_heavy_trader: input.is_heavy_trader,
        has_order_burst: input.has_order_burst,
        labels,
    }
}

fn recency_weight(value: f64) -> f64 {
    if value.is_nan() {
        warn!(
            "recencyWeight is NaN, using default {}",
            DEFAULT_RECENCY_WEIGHT
        );
        return DEFAULT_RECENCY_WEIGHT;
    }
    value.clamp(MIN_RECENCY_WEIGHT, MAX_RECENCY_WEIGHT)
}

fn magnitude(field: &str, value: f64) -> f64 {
    if value.is_nan() {
        warn!("{} is NaN, using 0", field);
        return 0.0;
    }
    if value == f64::INFINITY {
        warn!("{} is infinite, capping at f64::MAX", field);
        return f64::MAX;
    }
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_weight_is_clamped() {
        let low = normalize(&ClassificationInput::default().with_recency_weight(0.0));
        assert_eq!(low.recency_weight, MIN_RECENCY_WEIGHT);

        let high = normalize(&ClassificationInput::default().with_recency_weight(4.2));
        assert_eq!(high.recency_weight, MAX_RECENCY_WEIGHT);

        let inside = normalize(&ClassificationInput::default().with_recency_weight(0.55));
        assert_eq!(inside.recency_weight, 0.55);
    }

    #[test]
    fn test_nan_recency_falls_back_to_default() {
        let n = normalize(&ClassificationInput::default().with_recency_weight(f64::NAN));
        assert_eq!(n.recency_weight, DEFAULT_RECENCY_WEIGHT);
    }

    #[test]
    fn test_negative_magnitudes_floor_to_zero() {
        let n = normalize(&ClassificationInput::new(-10.0, -0.5, -3.0));
        assert_eq!(n.max_profit, 0.0);
        assert_eq!(n.max_loss, 0.0);
        assert_eq!(n.avg_position_size, 0.0);
    }

    #[test]
    fn test_non_finite_magnitudes() {
        let n = normalize(&ClassificationInput::new(f64::INFINITY, f64::NAN, f64::NEG_INFINITY));
        assert_eq!(n.max_profit, f64::MAX);
        assert_eq!(n.max_loss, 0.0);
        assert_eq!(n.avg_position_size, 0.0);
    }

    #[test]
    fn test_unknown_labels_are_dropped() {
        let input = ClassificationInput::default().with_labels(["vip", "AML", "aml", "AML", ""]);
        let n = normalize(&input);
        assert_eq!(n.labels.len(), 1);
        assert!(n.has(Label::Aml));
    }

    #[test]
    fn test_flags_pass_through() {
        let input = ClassificationInput::default()
            .with_heavy_trader(true)
            .with_order_burst(true);
        let n = normalize(&input);
        assert!(n.is_heavy_trader);
        assert!(n.has_order_burst);
    }
}
