use thiserror::Error;

/// Errors raised while building a net open position report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExposureError {
    #[error("Unknown direction '{0}': expected long or short")]
    UnknownDirection(String),

    #[error("Negative size {size} for {product}")]
    NegativeSize { product: String, size: String },

    #[error("Empty product name")]
    EmptyProduct,

    #[error("NOP threshold must be positive, got {0}")]
    InvalidThreshold(String),

    #[error("Exposure for {0} exceeds the representable size")]
    Overflow(String),
}

pub type ExposureResult<T> = std::result::Result<T, ExposureError>;

/// Errors raised by session and time-zone arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Session {0} closes before it opens")]
    InvertedSession(String),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
