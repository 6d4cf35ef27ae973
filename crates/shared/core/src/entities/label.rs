use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behaviour tag attached to a client account by the dealing desk.
///
/// The vocabulary is closed: strings outside it are not labels and are
/// dropped by the classifier's normalizer rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Label {
    Scalper,
    UltraShortTrader,
    Hedger,
    Martingale,
    Arbitrage,
    Stacking,
    FastTp,
    DayTrade,
    SystemSpamOrders,
    FirstTwoAbnormal,
    ChangingTradingBehaviour,
    SwingTrader,
    ExperienceTrader,
    NoTrade,
    InactiveNow,
    NewAccount,
    DelayTradeActivation,
    ChangingEa,
    Profiting,
    HoldsProfitLoss,
    WithdrawProfit,
    IncreasingTradingSize,
    LowFrequencyTrading,
    PendingOrder,
    Aml,
    AbnormalFunding,
    LargeOrder,
    MediumOrder,
    Trade1To3Lots,
    Trade3To6Lots,
    Trade6PlusLots,
    CeoFlagged,
    CopyTrade,
}

impl Label {
    /// Every label, in the order the desk presents them.
    pub const ALL: [Label; 33] = [
        Label::Scalper,
        Label::UltraShortTrader,
        Label::Hedger,
        Label::Martingale,
        Label::Arbitrage,
        Label::Stacking,
        Label::FastTp,
        Label::DayTrade,
        Label::SystemSpamOrders,
        Label::FirstTwoAbnormal,
        Label::ChangingTradingBehaviour,
        Label::SwingTrader,
        Label::ExperienceTrader,
        Label::NoTrade,
        Label::InactiveNow,
        Label::NewAccount,
        Label::DelayTradeActivation,
        Label::ChangingEa,
        Label::Profiting,
        Label::HoldsProfitLoss,
        Label::WithdrawProfit,
        Label::IncreasingTradingSize,
        Label::LowFrequencyTrading,
        Label::PendingOrder,
        Label::Aml,
        Label::AbnormalFunding,
        Label::LargeOrder,
        Label::MediumOrder,
        Label::Trade1To3Lots,
        Label::Trade3To6Lots,
        Label::Trade6PlusLots,
        Label::CeoFlagged,
        Label::CopyTrade,
    ];

    /// Wire/display form of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Scalper => "scalper",
            Label::UltraShortTrader => "ultra short trader",
            Label::Hedger => "hedger",
            Label::Martingale => "martingale",
            Label::Arbitrage => "arbitrage",
            Label::Stacking => "stacking",
            Label::FastTp => "fast TP",
            Label::DayTrade => "Day trade",
            Label::SystemSpamOrders => "system spam orders",
            Label::FirstTwoAbnormal => "first two abnormal",
            Label::ChangingTradingBehaviour => "changing trading behaviour",
            Label::SwingTrader => "swing trader",
            Label::ExperienceTrader => "experience trader",
            Label::NoTrade => "no trade",
            Label::InactiveNow => "inactive now",
            Label::NewAccount => "new account",
            Label::DelayTradeActivation => "delay trade activation",
            Label::ChangingEa => "changing EA",
            Label::Profiting => "profiting",
            Label::HoldsProfitLoss => "holds profit/loss",
            Label::WithdrawProfit => "withdraw profit",
            Label::IncreasingTradingSize => "increasing trading size",
            Label::LowFrequencyTrading => "low frequency trading",
            Label::PendingOrder => "pending order",
            Label::Aml => "AML",
            Label::AbnormalFunding => "abnormal funding",
            Label::LargeOrder => "large order",
            Label::MediumOrder => "medium order",
            Label::Trade1To3Lots => "trade 1-3 lots per position",
            Label::Trade3To6Lots => "trade 3-6 lots per position",
            Label::Trade6PlusLots => "trade 6+ lots per position",
            Label::CeoFlagged => "CEO flagged",
            Label::CopyTrade => "copy trade",
        }
    }

    /// Look up a label by its exact wire form
    pub fn parse(s: &str) -> Option<Label> {
        Label::ALL.iter().copied().find(|label| label.as_str() == s)
    }

    /// Onboarding labels put the account under supervision
    pub fn is_onboarding(&self) -> bool {
        matches!(self, Label::NewAccount | Label::DelayTradeActivation)
    }

    /// Compliance labels put the account under supervision
    pub fn is_compliance(&self) -> bool {
        matches!(
            self,
            Label::Aml | Label::AbnormalFunding | Label::CeoFlagged
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is outside the label vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::parse(s).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl TryFrom<String> for Label {
    type Error = UnknownLabel;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Label> for &'static str {
    fn from(label: Label) -> Self {
        label.as_str()
    }
}

/// Quick-pick label sets offered by the routing console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelPreset {
    Scalper,
    Martingale,
    Compliance,
    NewOrInactive,
    LargeSize,
    Experienced,
}

impl LabelPreset {
    pub const ALL: [LabelPreset; 6] = [
        LabelPreset::Scalper,
        LabelPreset::Martingale,
        LabelPreset::Compliance,
        LabelPreset::NewOrInactive,
        LabelPreset::LargeSize,
        LabelPreset::Experienced,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LabelPreset::Scalper => "Scalper",
            LabelPreset::Martingale => "Martingale",
            LabelPreset::Compliance => "Compliance",
            LabelPreset::NewOrInactive => "New/Inactive",
            LabelPreset::LargeSize => "Large size",
            LabelPreset::Experienced => "Experienced",
        }
    }

    pub fn labels(&self) -> &'static [Label] {
        match self {
            LabelPreset::Scalper => &[Label::Scalper, Label::FastTp, Label::DayTrade],
            LabelPreset::Martingale => &[Label::Martingale, Label::Stacking],
            LabelPreset::Compliance => &[Label::Aml, Label::AbnormalFunding, Label::CeoFlagged],
            LabelPreset::NewOrInactive => &[
                Label::NewAccount,
                Label::DelayTradeActivation,
                Label::InactiveNow,
            ],
            LabelPreset::LargeSize => &[Label::LargeOrder, Label::Trade6PlusLots],
            LabelPreset::Experienced => &[Label::ExperienceTrader, Label::Hedger],
        }
    }
}
