use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::orbit::{parse_tle_lines, OrbitError, Propagator};
use crate::poller::{PositionPoller, PositionSource, RemoteClient, SourceError, TrackSampler};
use crate::state::SharedStatus;

use super::api::dashboard as dashboard_handlers;
use super::api_doc::ApiDoc;
use super::config::{Config, ConfigError, SourceKind};
use super::ui::handlers as ui_handlers;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("orbit error: {0}")]
    Orbit(#[from] OrbitError),
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

#[derive(Clone)]
pub struct AppState {
    pub status: SharedStatus,
    pub satellite: String,
    pub refresh: Duration,
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let bind_addr = config.web.bind.clone();

    let tle = config.satellite.tle_text()?;
    let (_, line1, line2) = parse_tle_lines(&tle)?;
    let propagator = Arc::new(Propagator::from_tle(&tle)?);

    let satellite = config
        .satellite
        .name
        .clone()
        .or_else(|| propagator.object_name().map(String::from))
        .unwrap_or_else(|| format!("NORAD {}", propagator.norad_id()));

    let status = SharedStatus::new();
    let refresh = config.source.interval();

    let source = match config.source.kind {
        SourceKind::Propagator => PositionSource::Propagator(propagator.clone()),
        SourceKind::Remote => {
            PositionSource::Remote(RemoteClient::new(config.source.url().to_string())?)
        }
    };

    let mut position_poller = PositionPoller::start(source, status.clone(), refresh);
    let mut track_sampler = TrackSampler::start(
        propagator,
        line1,
        line2,
        status.clone(),
        config.track.interval,
    );

    let state = AppState {
        status,
        satellite: satellite.clone(),
        refresh,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Dashboard page
        .route("/", get(ui_handlers::dashboard))
        // Dashboard API endpoints
        .route("/api/status", get(dashboard_handlers::status))
        .route("/api/position", get(dashboard_handlers::position))
        .route("/api/track", get(dashboard_handlers::track))
        .route("/api/stats", get(dashboard_handlers::stats))
        .route("/api/plot", get(dashboard_handlers::plot))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Tracking {} on {}", satellite, bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Tear both timers down before exit; no background work survives the view.
    position_poller.stop().await;
    track_sampler.stop().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    log::info!("Shutting down");
}
