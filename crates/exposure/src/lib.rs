//! Desk Exposure
//!
//! Net Open Position (NOP) aggregation for the dealing desk. Positions are
//! entered as blotter lines (product, direction, size) and summarised per
//! product and across the whole book:
//!
//! ```text
//! NOP = Σ longs - Σ shorts
//!
//!   > 0  net long
//!   < 0  net short
//!   = 0  fully hedged
//! ```
//!
//! Products whose |NOP| reaches the threshold are flagged so the desk can
//! hedge or cap them.

pub mod calculator;
pub mod report;

pub use calculator::{DEFAULT_HIGH_NOP_THRESHOLD, NopCalculator, parse_direction, validate_line};
pub use report::{ExposureReport, PortfolioStatus, PositionStatus, ProductExposure};
