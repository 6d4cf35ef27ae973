//! Net Open Position calculator
//!
//! NOP = Σ longs - Σ shorts, per product and summed across the book.
//! Positive means net long, negative net short, zero fully hedged.

use desk_core::{Direction, ExposureLine};
use desk_ports::{ExposureError, ExposureResult};
use indexmap::IndexMap;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::report::{ExposureReport, PortfolioStatus, PositionStatus, ProductExposure};

/// Net exposure at which a product is flagged
pub const DEFAULT_HIGH_NOP_THRESHOLD: Decimal = dec!(1_000_000);

/// Parse a blotter direction (`long`/`longs`/`buy`, `short`/`shorts`/`sell`)
pub fn parse_direction(s: &str) -> ExposureResult<Direction> {
    match s.trim().to_ascii_lowercase().as_str() {
        "long" | "longs" | "buy" => Ok(Direction::Long),
        "short" | "shorts" | "sell" => Ok(Direction::Short),
        _ => Err(ExposureError::UnknownDirection(s.to_string())),
    }
}

/// Check a blotter line before it is aggregated
pub fn validate_line(line: &ExposureLine) -> ExposureResult<()> {
    if line.product.trim().is_empty() {
        return Err(ExposureError::EmptyProduct);
    }
    if line.size < Decimal::ZERO {
        return Err(ExposureError::NegativeSize {
            product: line.product.clone(),
            size: line.size.to_string(),
        });
    }
    Ok(())
}

#[derive(Default)]
struct Legs {
    longs: Decimal,
    shorts: Decimal,
}

/// Stateless NOP aggregator
#[derive(Debug, Clone)]
pub struct NopCalculator {
    threshold: Decimal,
}

impl Default for NopCalculator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_HIGH_NOP_THRESHOLD,
        }
    }
}

impl NopCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom high-NOP threshold (must be positive)
    pub fn with_threshold(threshold: Decimal) -> ExposureResult<Self> {
        if threshold <= Decimal::ZERO {
            return Err(ExposureError::InvalidThreshold(threshold.to_string()));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Aggregate blotter lines into a NOP report
    pub fn report(&self, lines: &[ExposureLine]) -> ExposureResult<ExposureReport> {
        let mut legs: IndexMap<&str, Legs> = IndexMap::new();

        for line in lines {
            validate_line(line)?;
            let entry = legs.entry(line.product.as_str()).or_default();
            let leg = match line.direction {
                Direction::Long => &mut entry.longs,
                Direction::Short => &mut entry.shorts,
            };
            *leg = leg
                .checked_add(line.size)
                .ok_or_else(|| ExposureError::Overflow(line.product.clone()))?;
        }

        let products = legs
            .into_iter()
            .map(|(product, sums)| -> ExposureResult<ProductExposure> {
                let nop = sums
                    .longs
                    .checked_sub(sums.shorts)
                    .ok_or_else(|| ExposureError::Overflow(product.to_string()))?;
                let high_nop = nop.abs() >= self.threshold;
                if high_nop {
                    warn!("High NOP on {}: {}", product, nop);
                }
                Ok(ProductExposure {
                    product: product.to_string(),
                    longs: sums.longs,
                    shorts: sums.shorts,
                    nop,
                    status: PositionStatus::from_nop(nop),
                    high_nop,
                })
            })
            .collect::<ExposureResult<Vec<_>>>()?;

        let net_total = products
            .iter()
            .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.nop))
            .ok_or_else(|| ExposureError::Overflow("portfolio".to_string()))?;
        let portfolio_status = if net_total.is_zero() {
            PortfolioStatus::Flat
        } else if net_total.abs() > self.threshold {
            PortfolioStatus::Elevated
        } else {
            PortfolioStatus::Open
        };

        debug!(
            "NOP report: {} products from {} lines, net total {}",
            products.len(),
            lines.len(),
            net_total
        );

        Ok(ExposureReport {
            products,
            net_total,
            portfolio_status,
            threshold: self.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("long").unwrap(), Direction::Long);
        assert_eq!(parse_direction(" Longs ").unwrap(), Direction::Long);
        assert_eq!(parse_direction("SELL").unwrap(), Direction::Short);
        assert_eq!(
            parse_direction("flat"),
            Err(ExposureError::UnknownDirection("flat".to_string()))
        );
    }

    #[test]
    fn test_threshold_must_be_positive() {
        assert!(NopCalculator::with_threshold(dec!(0)).is_err());
        assert!(NopCalculator::with_threshold(dec!(-5)).is_err());
        assert_eq!(
            NopCalculator::with_threshold(dec!(500)).unwrap().threshold(),
            dec!(500)
        );
    }

    #[test]
    fn test_negative_size_rejected() {
        let lines = vec![ExposureLine::long("EUR/USD", dec!(-1))];
        let err = NopCalculator::new().report(&lines).unwrap_err();
        assert!(matches!(err, ExposureError::NegativeSize { .. }));
    }

    #[test]
    fn test_empty_product_rejected() {
        let lines = vec![ExposureLine::short("  ", dec!(1))];
        assert_eq!(
            NopCalculator::new().report(&lines).unwrap_err(),
            ExposureError::EmptyProduct
        );
    }

    #[test]
    fn test_product_overflow_is_an_error() {
        let lines = vec![
            ExposureLine::long("EUR/USD", Decimal::MAX),
            ExposureLine::long("EUR/USD", Decimal::MAX),
        ];
        assert_eq!(
            NopCalculator::new().report(&lines).unwrap_err(),
            ExposureError::Overflow("EUR/USD".to_string())
        );
    }

    #[test]
    fn test_portfolio_overflow_is_an_error() {
        let lines = vec![
            ExposureLine::long("EUR/USD", Decimal::MAX),
            ExposureLine::long("GBP/USD", Decimal::MAX),
        ];
        assert_eq!(
            NopCalculator::new().report(&lines).unwrap_err(),
            ExposureError::Overflow("portfolio".to_string())
        );
    }

    #[test]
    fn test_opposite_extremes_net_out() {
        let lines = vec![
            ExposureLine::long("EUR/USD", Decimal::MAX),
            ExposureLine::short("USD/JPY", Decimal::MAX),
        ];
        let report = NopCalculator::new().report(&lines).unwrap();
        assert_eq!(report.net_total, Decimal::ZERO);
    }

    #[test]
    fn test_status_from_nop() {
        assert_eq!(PositionStatus::from_nop(dec!(0)), PositionStatus::FullyHedged);
        assert_eq!(PositionStatus::from_nop(dec!(10)), PositionStatus::NetLong);
        assert_eq!(PositionStatus::from_nop(dec!(-10)), PositionStatus::NetShort);
    }
}
