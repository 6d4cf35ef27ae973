use chrono::NaiveDate;
use desk_classifier::Explanation;
use desk_core::ClassificationResult;
use desk_sessions::{ConvertedTime, LondonClose, SessionOverlap, SessionRow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Request DTOs
// ============================================================================

/// One raw line of the exposure form; `direction` is free text
#[derive(Debug, Clone, Deserialize)]
pub struct ExposureLineRequest {
    pub product: String,
    pub direction: String,
    pub size: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExposureRequest {
    #[serde(default)]
    pub lines: Vec<ExposureLineRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsQuery {
    pub date: Option<NaiveDate>,
    /// Zone for the "your time" column
    pub viewer: Option<String>,
    pub london_close: Option<LondonClose>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub time: String,
    pub from: String,
    pub to: Vec<String>,
    /// Source-zone calendar date; decides daylight saving. Defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub explanation: Explanation,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetResponse {
    pub name: &'static str,
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelsResponse {
    pub labels: Vec<&'static str>,
    pub presets: Vec<PresetResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsResponse {
    pub date: NaiveDate,
    pub london_close: LondonClose,
    /// IANA name or fixed offset of the "your time" column
    pub viewer_zone: String,
    pub sessions: Vec<SessionRow>,
    pub overlaps: Vec<SessionOverlap>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub results: Vec<ConvertedTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        ErrorResponse {
            code,
            msg: msg.into(),
        }
    }
}
