//! Desk Routing Classifier
//!
//! Decides how a client account's order flow is booked:
//!
//! - **Rating**: 1-5 risk rating from profit/loss shape, size and behaviour labels
//! - **Base route**: A-Book only when rating > 3 AND biggest profit > biggest loss
//! - **Monitor**: supervision overlay for onboarding and compliance labels
//! - **MM-Stream**: advisory preference for heavy or bursty large-size flow
//!
//! ## Pipeline
//!
//! ```text
//! ClassificationInput
//!        │
//!        ▼
//!   Normalizer ───► clamp recency, floor magnitudes, drop unknown labels
//!        │
//!        ▼
//!     Scorer ─────► score + rating + attribution
//!        │
//!        ▼
//!  Decision Engine ► route, Monitor, MM-Stream
//!        │
//!        ▼
//!  Explanation ───► operational notes
//!        │
//!        ▼
//! ClassificationResult
//! ```
//!
//! Every stage is a pure function; the classifier never fails and never
//! keeps state between calls.

pub mod classifier;
pub mod decision;
pub mod explanation;
pub mod normalizer;
pub mod scorer;
pub mod weights;

// Re-export main types
pub use classifier::{RiskClassifier, classify};
pub use decision::RoutingDecision;
pub use explanation::{Explanation, explain};
pub use normalizer::NormalizedInput;
pub use scorer::RiskScore;
