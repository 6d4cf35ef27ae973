//! Fixed scoring weights
//!
//! Every weight the scorer applies lives here. Label weights are an
//! exhaustive match over the vocabulary so a new label cannot be added
//! without deciding its weight.

use desk_core::{Label, SizeBucket};

/// Added when the account is flagged as a heavy trader
pub const HEAVY_TRADER_WEIGHT: f64 = 0.6;

pub fn size_bucket_weight(bucket: SizeBucket) -> f64 {
    match bucket {
        SizeBucket::SixPlus => 1.2,
        SizeBucket::ThreeToSix => 0.7,
        SizeBucket::OneToThree => 0.3,
    }
}

/// Signed score delta for a label (0 for labels that do not score)
pub fn label_weight(label: Label) -> f64 {
    match label {
        // Risk-up
        Label::Scalper => 0.6,
        Label::UltraShortTrader => 0.7,
        Label::Martingale => 1.3,
        Label::Arbitrage => 1.0,
        Label::Stacking => 0.7,
        Label::FastTp => 0.5,
        Label::SystemSpamOrders => 0.9,
        Label::FirstTwoAbnormal => 0.5,
        Label::ChangingTradingBehaviour => 0.4,
        Label::ChangingEa => 0.4,
        Label::IncreasingTradingSize => 0.6,
        Label::Aml => 1.6,
        Label::AbnormalFunding => 1.1,
        Label::LargeOrder => 0.8,
        Label::MediumOrder => 0.4,
        Label::PendingOrder => 0.2,
        Label::DayTrade => 0.3,
        Label::CopyTrade => 0.6,
        // Risk-down
        Label::Hedger => -0.7,
        Label::ExperienceTrader => -0.4,
        Label::LowFrequencyTrading => -0.25,
        Label::SwingTrader => -0.15,
        Label::HoldsProfitLoss => -0.15,
        Label::WithdrawProfit => -0.15,
        Label::NoTrade => -0.25,
        Label::InactiveNow => -0.35,
        Label::Profiting => -0.15,
        // Overlay and size-bucket labels do not score directly
        Label::NewAccount
        | Label::DelayTradeActivation
        | Label::CeoFlagged
        | Label::Trade1To3Lots
        | Label::Trade3To6Lots
        | Label::Trade6PlusLots => 0.0,
    }
}

/// Order in which label weights are applied: risk-up, then risk-down
pub const SCORED_LABELS: [Label; 27] = [
    Label::Scalper,
    Label::UltraShortTrader,
    Label::Martingale,
    Label::Arbitrage,
    Label::Stacking,
    Label::FastTp,
    Label::SystemSpamOrders,
    Label::FirstTwoAbnormal,
    Label::ChangingTradingBehaviour,
    Label::ChangingEa,
    Label::IncreasingTradingSize,
    Label::Aml,
    Label::AbnormalFunding,
    Label::LargeOrder,
    Label::MediumOrder,
    Label::PendingOrder,
    Label::DayTrade,
    Label::CopyTrade,
    Label::Hedger,
    Label::ExperienceTrader,
    Label::LowFrequencyTrading,
    Label::SwingTrader,
    Label::HoldsProfitLoss,
    Label::WithdrawProfit,
    Label::NoTrade,
    Label::InactiveNow,
    Label::Profiting,
];
