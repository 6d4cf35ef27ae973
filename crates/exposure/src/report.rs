//! NOP report types

use desk_core::{Size, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hedge status of a single product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionStatus {
    /// Longs and shorts cancel out
    FullyHedged,
    NetLong,
    NetShort,
}

impl PositionStatus {
    pub fn from_nop(nop: Decimal) -> Self {
        if nop.is_zero() {
            PositionStatus::FullyHedged
        } else if nop > Decimal::ZERO {
            PositionStatus::NetLong
        } else {
            PositionStatus::NetShort
        }
    }
}

/// Portfolio-wide NOP assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortfolioStatus {
    /// Net total is exactly zero
    Flat,
    /// Net exposure within the threshold
    Open,
    /// Net exposure above the threshold
    Elevated,
}

/// Aggregated exposure of one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductExposure {
    pub product: Symbol,
    /// Sum of long sizes
    pub longs: Size,
    /// Sum of short sizes
    pub shorts: Size,
    /// longs - shorts
    pub nop: Size,
    pub status: PositionStatus,
    /// |nop| reached the threshold
    pub high_nop: bool,
}

/// NOP per product plus the portfolio total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureReport {
    /// Products in order of first appearance
    pub products: Vec<ProductExposure>,
    pub net_total: Size,
    pub portfolio_status: PortfolioStatus,
    pub threshold: Size,
}

impl ExposureReport {
    pub fn product(&self, product: &str) -> Option<&ProductExposure> {
        self.products.iter().find(|p| p.product == product)
    }

    /// Products whose NOP reached the threshold
    pub fn high_nop_products(&self) -> impl Iterator<Item = &ProductExposure> {
        self.products.iter().filter(|p| p.high_nop)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
