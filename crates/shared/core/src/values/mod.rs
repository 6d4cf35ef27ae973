use rust_decimal::Decimal;

/// Position size in lots
pub type Lots = f64;

/// Exposure size in base units - uses Decimal for precision
pub type Size = Decimal;

/// Product identifier, e.g. `EUR/USD`
pub type Symbol = String;
