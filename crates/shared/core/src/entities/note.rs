use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational guidance attached to a routing decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalNote {
    /// Both A-Book gates passed
    ABookGatePassed,
    /// Rating above the threshold but profit did not exceed loss
    ProfitGateFailed,
    /// Rating at or below the threshold
    RatingGateFailed,
    OnboardingMonitor,
    ComplianceMonitor,
    BurstOnABook,
    BurstInternalized,
    PreferMarketMaking,
}

impl OperationalNote {
    /// True for notes that explain the base route
    pub fn is_route_rationale(&self) -> bool {
        matches!(
            self,
            OperationalNote::ABookGatePassed
                | OperationalNote::ProfitGateFailed
                | OperationalNote::RatingGateFailed
        )
    }
}

impl fmt::Display for OperationalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OperationalNote::ABookGatePassed => {
                "Rating > 3 and Biggest Profit > Biggest Loss → route to A-Book."
            }
            OperationalNote::ProfitGateFailed => {
                "Rating > 3 but Biggest Profit ≤ Biggest Loss → stay in B-Book."
            }
            OperationalNote::RatingGateFailed => "Rating ≤ 3 → stay in B-Book.",
            OperationalNote::OnboardingMonitor => "Onboarding: add Monitor.",
            OperationalNote::ComplianceMonitor => "Compliance flags: add Monitor.",
            OperationalNote::BurstOnABook => {
                "Burst on A-Book: verify LP depth, throttles, credit lines."
            }
            OperationalNote::BurstInternalized => {
                "Burst internalized: enforce throttles/position caps/circuit breakers."
            }
            OperationalNote::PreferMarketMaking => {
                "Prefer MM-Stream under heavy with large sizes or ongoing bursts; throttle/hedge as configured."
            }
        };
        f.write_str(text)
    }
}
