use super::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use desk_ports::{ExposureError, SessionError};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(code: i32, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Body or query string that does not deserialize
    pub fn malformed_request(reason: impl Into<String>) -> Self {
        Self::bad_request(-1101, format!("Malformed request: {}", reason.into()))
    }

    pub fn invalid_parameter(param: &str, reason: &str) -> Self {
        Self::bad_request(-1100, format!("Illegal parameter '{}': {}", param, reason))
    }
}

impl From<ExposureError> for ApiError {
    fn from(err: ExposureError) -> Self {
        let code = match err {
            ExposureError::UnknownDirection(_) => -2010,
            ExposureError::NegativeSize { .. } => -2011,
            ExposureError::EmptyProduct => -2012,
            ExposureError::InvalidThreshold(_) => -2013,
            ExposureError::Overflow(_) => -2014,
        };
        Self::bad_request(code, err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        let code = match err {
            SessionError::UnknownZone(_) => -2020,
            SessionError::InvalidOffset(_) => -2021,
            SessionError::InvalidTime(_) => -2022,
            SessionError::InvertedSession(_) => -2023,
        };
        Self::bad_request(code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);
        let body = Json(ErrorResponse::new(self.code, self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
