//! Risk scorer
//!
//! Accumulates a continuous score from three signal groups (profit/loss
//! shape, size bucket, labels) plus the heavy-trader adjustment, scales it
//! by recency and maps it onto the 1-5 rating.

use desk_core::{Contribution, Signal, SizeBucket};
use log::debug;

use crate::normalizer::NormalizedInput;
use crate::weights::{HEAVY_TRADER_WEIGHT, SCORED_LABELS, label_weight, size_bucket_weight};

/// Regularizer keeping the profit/loss ratio defined when both are zero
pub const RATIO_EPSILON: f64 = 1e-9;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
/// Rating produced by a zero score
pub const NEUTRAL_RATING: u8 = 3;

/// Score, rating and the contributions that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore {
    pub score: f64,
    pub rating: u8,
    pub attribution: Vec<Contribution>,
}

/// Biggest profit over biggest loss, regularized
pub fn profit_loss_ratio(max_profit: f64, max_loss: f64) -> f64 {
    (max_profit + RATIO_EPSILON) / (max_loss + RATIO_EPSILON)
}

/// Bounded symmetric transform: 1 maps to 0, the result stays in (-2, 2]
pub fn shape_transform(ratio: f64) -> f64 {
    if ratio.is_infinite() {
        return 2.0;
    }
    // Divide first: 2(r - 1) overflows for r above f64::MAX / 2
    2.0 * ((ratio - 1.0) / (ratio.abs() + 1.0))
}

pub fn profit_loss_signal(max_profit: f64, max_loss: f64) -> f64 {
    shape_transform(profit_loss_ratio(max_profit, max_loss))
}

/// Highest matching size bucket, by typical size or by size label
pub fn size_bucket(input: &NormalizedInput) -> Option<SizeBucket> {
    SizeBucket::DESCENDING
        .into_iter()
        .find(|bucket| input.has(bucket.label()) || input.avg_position_size >= bucket.min_lots())
}

/// Multiplier applied to the whole score, in [0.65, 0.95]
pub fn recency_factor(recency_weight: f64) -> f64 {
    0.5 + recency_weight / 2.0
}

/// Map a score onto the rating scale (ties round to even)
pub fn rating_from_score(score: f64) -> u8 {
    let raw = 3.0 + 2.0 * (score / 3.0);
    if raw.is_nan() {
        return NEUTRAL_RATING;
    }
    raw.round_ties_even()
        .clamp(f64::from(MIN_RATING), f64::from(MAX_RATING)) as u8
}

/// Score a normalized input
pub fn score(input: &NormalizedInput) -> RiskScore {
    let mut score = 0.0;
    let mut attribution = Vec::new();

    if input.max_profit > 0.0 || input.max_loss > 0.0 {
        let ratio = profit_loss_ratio(input.max_profit, input.max_loss);
        let signal = shape_transform(ratio);
        score += signal;
        attribution.push(Contribution::new(Signal::ProfitLossShape { ratio }, signal));
    }

    if let Some(bucket) = size_bucket(input) {
        let weight = size_bucket_weight(bucket);
        score += weight;
        attribution.push(Contribution::new(Signal::SizeBucket { bucket }, weight));
    }

    for label in SCORED_LABELS {
        if input.has(label) {
            let weight = label_weight(label);
            score += weight;
            attribution.push(Contribution::new(Signal::Label { label }, weight));
        }
    }

    if input.is_heavy_trader {
        score += HEAVY_TRADER_WEIGHT;
        attribution.push(Contribution::new(Signal::HeavyTrader, HEAVY_TRADER_WEIGHT));
    }

    let factor = recency_factor(input.recency_weight);
    let scaled = score * factor;
    attribution.push(Contribution::new(
        Signal::Recency {
            weight: input.recency_weight,
            factor,
        },
        scaled - score,
    ));
    score = scaled;

    let rating = rating_from_score(score);
    debug!("Risk score {:.4} -> rating {}", score, rating);

    RiskScore {
        score,
        rating,
        attribution,
    }
}
