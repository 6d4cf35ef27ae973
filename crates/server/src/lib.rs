//! Desk Server
//!
//! JSON-over-HTTP front for the dealing-desk calculators:
//!
//! - `POST /api/v1/classify` routes a client profile to A-Book or B-Book
//! - `POST /api/v1/exposure` aggregates position lines into a NOP report
//! - `GET  /api/v1/sessions` shows the session table and overlaps
//! - `POST /api/v1/time/convert` converts a time of day between zones
//!
//! Handlers are stateless; the only shared state is the configuration and
//! the classifier behind `Arc`.
//!
//! ## Usage
//!
//! ```ignore
//! use desk_server::{DeskConfig, DeskServer};
//!
//! let server = DeskServer::new(DeskConfig::from_env())?;
//! server.run().await?;
//! ```

pub mod config;
pub mod rest;

pub use config::{ConfigError, DeskConfig, ExposureConfig, ServerConfig, SessionsConfig};
pub use rest::{ApiError, AppState, create_router};

use axum::Router;
use desk_sessions::{Clock, SystemClock};
use std::sync::Arc;

/// Configured server, ready to bind
pub struct DeskServer<C: Clock + 'static> {
    pub config: DeskConfig,
    state: Arc<AppState<C>>,
}

impl DeskServer<SystemClock> {
    /// Server on the wall clock
    pub fn new(config: DeskConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }
}

impl<C: Clock + 'static> DeskServer<C> {
    /// Server on the given clock
    pub fn with_clock(config: DeskConfig, clock: Arc<C>) -> Result<Self, ConfigError> {
        let state = Arc::new(AppState::from_config(clock, config.clone())?);
        Ok(DeskServer { config, state })
    }

    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.state))
    }

    /// Bind and serve until the process stops
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_address();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Desk server listening on {}", addr);
        axum::serve(listener, router).await?;

        Ok(())
    }
}
