use serde::{Deserialize, Serialize};
use std::fmt;

use crate::values::{Size, Symbol};

/// Side of an open position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Returns the opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => f.write_str("Longs"),
            Direction::Short => f.write_str("Shorts"),
        }
    }
}

/// A single open position entered into the NOP blotter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureLine {
    /// Product, e.g. `EUR/USD` or `XAUUSD`
    pub product: Symbol,
    pub direction: Direction,
    /// Size in base units
    pub size: Size,
}

impl ExposureLine {
    pub fn new(product: impl Into<Symbol>, direction: Direction, size: Size) -> Self {
        Self {
            product: product.into(),
            direction,
            size,
        }
    }

    pub fn long(product: impl Into<Symbol>, size: Size) -> Self {
        Self::new(product, Direction::Long, size)
    }

    pub fn short(product: impl Into<Symbol>, size: Size) -> Self {
        Self::new(product, Direction::Short, size)
    }

    /// Size with the sign of the direction (long positive)
    pub fn signed_size(&self) -> Size {
        match self.direction {
            Direction::Long => self.size,
            Direction::Short => -self.size,
        }
    }
}
