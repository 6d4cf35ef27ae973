//! Desk Ports
//!
//! Port definitions (traits) and shared error types for the dealing-desk
//! toolkit. These define the boundaries between domain logic and the
//! presentation layer.

mod classifier;
mod clock;
mod error;

pub use classifier::RoutingClassifier;
pub use clock::Clock;
pub use error::{ExposureError, ExposureResult, SessionError, SessionResult};
