use desk_core::{ClassificationInput, ClassificationResult};

/// Port for order-routing classification
///
/// Implementations are pure: the same input always yields the same
/// result, and no state is carried between calls, so a single instance
/// can be shared freely across request handlers.
pub trait RoutingClassifier: Send + Sync {
    /// Classify an account and produce its routing decision
    fn classify(&self, input: &ClassificationInput) -> ClassificationResult;

    /// Get the classifier's name/identifier for debugging
    fn name(&self) -> &str {
        "RoutingClassifier"
    }
}
