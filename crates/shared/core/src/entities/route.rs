use serde::{Deserialize, Serialize};
use std::fmt;

/// Base book an account's flow is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Orders passed through to an external liquidity provider
    #[serde(rename = "A_BOOK")]
    ABook,
    /// Orders internalized against the desk's own book
    #[serde(rename = "B_BOOK")]
    BBook,
}

impl Route {
    pub fn is_external(&self) -> bool {
        matches!(self, Route::ABook)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::ABook => f.write_str("A-Book"),
            Route::BBook => f.write_str("B-Book"),
        }
    }
}
