use serde::{Deserialize, Serialize};

use super::attribution::Contribution;
use super::note::OperationalNote;
use super::route::Route;

/// Recency weight used when the caller does not supply one
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.7;

fn default_recency_weight() -> f64 {
    DEFAULT_RECENCY_WEIGHT
}

/// Account attributes submitted for routing classification.
///
/// Values are taken as supplied; the classifier clamps and filters them,
/// so no combination here is invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationInput {
    /// Weight of recent behaviour, meaningful in [0.3, 0.9]
    #[serde(default = "default_recency_weight")]
    pub recency_weight: f64,
    /// Biggest profit (absolute, $ or pips)
    pub max_profit: f64,
    /// Biggest loss (absolute, $ or pips)
    pub max_loss: f64,
    /// Typical position size in lots
    pub avg_position_size: f64,
    #[serde(default)]
    pub is_heavy_trader: bool,
    /// Open-orders burst in progress
    #[serde(default)]
    pub has_order_burst: bool,
    /// Behaviour tags; strings outside the vocabulary are ignored
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Default for ClassificationInput {
    fn default() -> Self {
        Self {
            recency_weight: DEFAULT_RECENCY_WEIGHT,
            max_profit: 0.0,
            max_loss: 0.0,
            avg_position_size: 0.0,
            is_heavy_trader: false,
            has_order_burst: false,
            labels: Vec::new(),
        }
    }
}

impl ClassificationInput {
    pub fn new(max_profit: f64, max_loss: f64, avg_position_size: f64) -> Self {
        Self {
            max_profit,
            max_loss,
            avg_position_size,
            ..Default::default()
        }
    }

    pub fn with_recency_weight(mut self, weight: f64) -> Self {
        self.recency_weight = weight;
        self
    }

    pub fn with_heavy_trader(mut self, heavy: bool) -> Self {
        self.is_heavy_trader = heavy;
        self
    }

    pub fn with_order_burst(mut self, burst: bool) -> Self {
        self.has_order_burst = burst;
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Routing decision for one classification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Risk rating, always within 1..=5
    pub rating: u8,
    pub route: Route,
    /// Advisory MM-Stream preference; never changes `route`
    pub prefer_market_making: bool,
    /// Monitor overlay; never changes `route`
    pub needs_monitor: bool,
    /// Continuous score the rating was derived from
    pub score: f64,
    /// Signals in evaluation order
    pub attribution: Vec<Contribution>,
    pub notes: Vec<OperationalNote>,
}

impl ClassificationResult {
    /// One-line routing summary, e.g. `B-Book + Monitor + MM-Stream (preferred)`
    pub fn summary(&self) -> String {
        let mut out = self.route.to_string();
        if self.needs_monitor {
            out.push_str(" + Monitor");
        }
        if self.prefer_market_making {
            out.push_str(" + MM-Stream (preferred)");
        }
        out
    }
}
