use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use desk_classifier::explain;
use desk_core::{ClassificationInput, ExposureLine, Label, LabelPreset};
use desk_exposure::{ExposureReport, parse_direction};
use desk_ports::Clock;
use desk_sessions::{
    STANDARD_OVERLAPS, default_sessions, overlaps, resolve_zone, session_table,
};
use std::sync::Arc;

use super::{ApiError, AppState, dto::*};

/// GET /api/v1/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {})
}

/// POST /api/v1/classify
pub async fn classify<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    payload: Result<Json<ClassificationInput>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::malformed_request(e.body_text()))?;

    let result = state.classifier.classify(&input);
    tracing::info!(
        "Classified via {}: rating {} -> {}",
        state.classifier.name(),
        result.rating,
        result.summary()
    );

    let explanation = explain(&result);
    Ok(Json(ClassifyResponse {
        result,
        explanation,
    }))
}

/// GET /api/v1/labels
pub async fn labels() -> Json<LabelsResponse> {
    Json(LabelsResponse {
        labels: Label::ALL.iter().map(Label::as_str).collect(),
        presets: LabelPreset::ALL
            .iter()
            .map(|preset| PresetResponse {
                name: preset.name(),
                labels: preset.labels().iter().map(Label::as_str).collect(),
            })
            .collect(),
    })
}

/// POST /api/v1/exposure
pub async fn exposure<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    payload: Result<Json<ExposureRequest>, JsonRejection>,
) -> Result<Json<ExposureReport>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::malformed_request(e.body_text()))?;

    let lines = request
        .lines
        .into_iter()
        .map(|line| -> Result<ExposureLine, ApiError> {
            let direction = parse_direction(&line.direction)?;
            Ok(ExposureLine::new(line.product, direction, line.size))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = state.nop.report(&lines)?;
    tracing::info!(
        "NOP report over {} lines: {} products, net {}",
        lines.len(),
        report.products.len(),
        report.net_total
    );
    Ok(Json(report))
}

/// GET /api/v1/sessions
pub async fn sessions<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    query: Result<Query<SessionsQuery>, QueryRejection>,
) -> Result<Json<SessionsResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::malformed_request(e.body_text()))?;

    let date = query.date.unwrap_or_else(|| state.clock.today());
    let london_close = query.london_close.unwrap_or(state.config.sessions.london_close);
    let viewer_zone = query
        .viewer
        .as_deref()
        .unwrap_or(&state.config.sessions.viewer_zone);
    let viewer = resolve_zone(viewer_zone)?;

    let centers = default_sessions(london_close);
    Ok(Json(SessionsResponse {
        date,
        london_close,
        viewer_zone: viewer.name(),
        sessions: session_table(&centers, date, viewer),
        overlaps: overlaps(&centers, &STANDARD_OVERLAPS, date, viewer),
    }))
}

/// POST /api/v1/time/convert
pub async fn convert_time<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::malformed_request(e.body_text()))?;

    if request.to.is_empty() {
        return Err(ApiError::invalid_parameter("to", "at least one target zone is required"));
    }

    let date = request.date.unwrap_or_else(|| state.clock.today());
    let results = desk_sessions::convert(&request.time, &request.from, &request.to, date)?;
    Ok(Json(ConvertResponse { results }))
}
