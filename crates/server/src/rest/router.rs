use axum::{
    Router,
    routing::{get, post},
};
use desk_classifier::RiskClassifier;
use desk_exposure::NopCalculator;
use desk_ports::{Clock, RoutingClassifier};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::{ConfigError, DeskConfig};

/// Application state shared across handlers
pub struct AppState<C: Clock> {
    pub clock: Arc<C>,
    pub classifier: Arc<dyn RoutingClassifier>,
    pub nop: NopCalculator,
    pub config: DeskConfig,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        clock: Arc<C>,
        classifier: Arc<dyn RoutingClassifier>,
        nop: NopCalculator,
        config: DeskConfig,
    ) -> Self {
        AppState {
            clock,
            classifier,
            nop,
            config,
        }
    }

    /// State with the default risk classifier and the configured NOP threshold
    pub fn from_config(clock: Arc<C>, config: DeskConfig) -> Result<Self, ConfigError> {
        let nop = NopCalculator::with_threshold(config.exposure.high_nop_threshold)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(Self::new(clock, Arc::new(RiskClassifier), nop, config))
    }
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/api/v1/ping", get(handlers::ping))
        // Routing console
        .route("/api/v1/classify", post(handlers::classify::<C>))
        .route("/api/v1/labels", get(handlers::labels))
        // Exposure
        .route("/api/v1/exposure", post(handlers::exposure::<C>))
        // Session clock
        .route("/api/v1/sessions", get(handlers::sessions::<C>))
        .route("/api/v1/time/convert", post(handlers::convert_time::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
