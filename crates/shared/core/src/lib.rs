//! Desk Core Domain
//!
//! Pure domain types for the dealing-desk toolkit.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Routing classification
    ClassificationInput,
    ClassificationResult,
    Contribution,
    DEFAULT_RECENCY_WEIGHT,
    // Net open position
    Direction,
    ExposureLine,
    Label,
    LabelPreset,
    OperationalNote,
    Route,
    Signal,
    SizeBucket,
    UnknownLabel,
};
pub use values::{Lots, Size, Symbol};
