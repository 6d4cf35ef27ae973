//! Explanation builder
//!
//! Derives operational notes from decisions already taken and renders the
//! attribution trail as text. Holds no decision logic of its own.

use desk_core::{ClassificationResult, OperationalNote, Route};
use serde::Serialize;

use crate::decision::{A_BOOK_RATING_THRESHOLD, RoutingDecision, is_compliance_flagged, is_onboarding};
use crate::normalizer::NormalizedInput;

/// Operational notes in presentation order
pub fn operational_notes(
    input: &NormalizedInput,
    rating: u8,
    decision: &RoutingDecision,
) -> Vec<OperationalNote> {
    let mut notes = Vec::new();

    notes.push(match decision.route {
        Route::ABook => OperationalNote::ABookGatePassed,
        Route::BBook if rating > A_BOOK_RATING_THRESHOLD => OperationalNote::ProfitGateFailed,
        Route::BBook => OperationalNote::RatingGateFailed,
    });

    if is_onboarding(input) {
        notes.push(OperationalNote::OnboardingMonitor);
    }
    if is_compliance_flagged(input) {
        notes.push(OperationalNote::ComplianceMonitor);
    }

    if input.has_order_burst {
        notes.push(match decision.route {
            Route::ABook => OperationalNote::BurstOnABook,
            Route::BBook => OperationalNote::BurstInternalized,
        });
    }

    if decision.prefer_market_making {
        notes.push(OperationalNote::PreferMarketMaking);
    }

    notes
}

/// Human-readable rendering of a classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// e.g. `A-Book + Monitor`
    pub summary: String,
    /// One line per attribution entry
    pub reasons: Vec<String>,
    /// One line per operational note
    pub notes: Vec<String>,
}

pub fn explain(result: &ClassificationResult) -> Explanation {
    Explanation {
        summary: result.summary(),
        reasons: result.attribution.iter().map(ToString::to_string).collect(),
        notes: result.notes.iter().map(ToString::to_string).collect(),
    }
}
