use desk_core::{ClassificationInput, ClassificationResult};
use desk_ports::RoutingClassifier;
use log::debug;

use crate::decision::decide;
use crate::explanation::operational_notes;
use crate::normalizer::normalize;
use crate::scorer::score;

/// Rule-based routing classifier
///
/// Runs normalizer, scorer, decision engine and explanation builder in a
/// single pass. Stateless, so one instance serves any number of callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl RoutingClassifier for RiskClassifier {
    fn classify(&self, input: &ClassificationInput) -> ClassificationResult {
        let normalized = normalize(input);
        let risk = score(&normalized);
        let decision = decide(&normalized, risk.rating);
        let notes = operational_notes(&normalized, risk.rating, &decision);

        debug!(
            "Classified: rating={} route={} monitor={} mm={}",
            risk.rating, decision.route, decision.needs_monitor, decision.prefer_market_making
        );

        ClassificationResult {
            rating: risk.rating,
            route: decision.route,
            prefer_market_making: decision.prefer_market_making,
            needs_monitor: decision.needs_monitor,
            score: risk.score,
            attribution: risk.attribution,
            notes,
        }
    }

    fn name(&self) -> &str {
        "RiskClassifier"
    }
}

/// Classify with the default [`RiskClassifier`]
pub fn classify(input: &ClassificationInput) -> ClassificationResult {
    RiskClassifier.classify(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::{OperationalNote, Route};

    #[test]
    fn test_default_dashboard_input() {
        let _ = env_logger::try_init();

        let result = classify(&ClassificationInput::new(1000.0, 800.0, 1.5));
        assert_eq!(result.rating, 3);
        assert_eq!(result.route, Route::BBook);
        assert!(!result.needs_monitor);
        assert!(!result.prefer_market_making);
        assert_eq!(result.notes, vec![OperationalNote::RatingGateFailed]);
    }

    #[test]
    fn test_name() {
        assert_eq!(RiskClassifier::new().name(), "RiskClassifier");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let classifier: Box<dyn RoutingClassifier> = Box::new(RiskClassifier::new());
        let input = ClassificationInput::new(0.0, 0.0, 0.0);
        assert_eq!(classifier.classify(&input).rating, 3);
    }
}
