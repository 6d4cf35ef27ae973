use serde::{Deserialize, Serialize};
use std::fmt;

use super::label::Label;

/// Position-size bucket, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeBucket {
    /// 6 lots and above
    SixPlus,
    /// 3 to 6 lots
    ThreeToSix,
    /// 1 to 3 lots
    OneToThree,
}

impl SizeBucket {
    /// Buckets in the order they are tested; the first match wins
    pub const DESCENDING: [SizeBucket; 3] = [
        SizeBucket::SixPlus,
        SizeBucket::ThreeToSix,
        SizeBucket::OneToThree,
    ];

    /// Smallest typical size (in lots) that falls in this bucket
    pub fn min_lots(&self) -> f64 {
        match self {
            SizeBucket::SixPlus => 6.0,
            SizeBucket::ThreeToSix => 3.0,
            SizeBucket::OneToThree => 1.0,
        }
    }

    /// Label that places an account in this bucket regardless of its size
    pub fn label(&self) -> Label {
        match self {
            SizeBucket::SixPlus => Label::Trade6PlusLots,
            SizeBucket::ThreeToSix => Label::Trade3To6Lots,
            SizeBucket::OneToThree => Label::Trade1To3Lots,
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeBucket::SixPlus => f.write_str("Size ≥6 lots"),
            SizeBucket::ThreeToSix => f.write_str("Size 3–6 lots"),
            SizeBucket::OneToThree => f.write_str("Size 1–3 lots"),
        }
    }
}

/// A scoring signal that moved the risk score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Signal {
    /// Biggest profit vs biggest loss asymmetry
    ProfitLossShape { ratio: f64 },
    SizeBucket { bucket: SizeBucket },
    Label { label: Label },
    HeavyTrader,
    /// Scaling of the accumulated score by the recency weight
    Recency { weight: f64, factor: f64 },
}

/// One entry of the attribution trail: a signal and the amount it added
/// to the score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub signal: Signal,
    pub weight: f64,
}

impl Contribution {
    pub fn new(signal: Signal, weight: f64) -> Self {
        Self { signal, weight }
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.signal {
            Signal::ProfitLossShape { ratio } => {
                write!(f, "P/L shape ratio≈{:.2} → {:+.2}", ratio, self.weight)
            }
            Signal::SizeBucket { bucket } => write!(f, "{} → {:+}", bucket, self.weight),
            Signal::Label { label } => write!(f, "Label '{}' → {:+}", label, self.weight),
            Signal::HeavyTrader => {
                write!(f, "Heavy trader → {:+} (rating influence only)", self.weight)
            }
            Signal::Recency { weight, factor } => write!(
                f,
                "Recency weighting {:.2} applied (×{:.3}, {:+.2})",
                weight, factor, self.weight
            ),
        }
    }
}
