use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::orbit::{GeodeticSample, OrbitalStats, TrackSet};
use crate::plot::{build_figure, PlotFigure};
use crate::state::DashboardMode;
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub satellite: String,
    pub mode: DashboardMode,
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Dashboard mode", body = StatusResponse)
    ),
    tag = "dashboard"
)]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let snapshot = state.status.snapshot();
    Json(StatusResponse {
        satellite: state.satellite.clone(),
        mode: snapshot.mode,
    })
}

#[utoipa::path(
    get,
    path = "/api/position",
    responses(
        (status = 200, description = "Latest sub-satellite point, null until the first sample", body = Option<GeodeticSample>)
    ),
    tag = "dashboard"
)]
pub async fn position(State(state): State<AppState>) -> Json<Option<GeodeticSample>> {
    Json(state.status.snapshot().position)
}

#[utoipa::path(
    get,
    path = "/api/track",
    responses(
        (status = 200, description = "Current orbit path and decimated ground track", body = TrackSet)
    ),
    tag = "dashboard"
)]
pub async fn track(State(state): State<AppState>) -> Json<TrackSet> {
    Json(state.status.snapshot().track)
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Orbital stats derived from the element set", body = Option<OrbitalStats>)
    ),
    tag = "dashboard"
)]
pub async fn stats(State(state): State<AppState>) -> Json<Option<OrbitalStats>> {
    Json(state.status.snapshot().stats)
}

#[utoipa::path(
    get,
    path = "/api/plot",
    responses(
        (status = 200, description = "Plot-ready figure, null while loading", body = Option<PlotFigure>)
    ),
    tag = "dashboard"
)]
pub async fn plot(State(state): State<AppState>) -> Json<Option<PlotFigure>> {
    let snapshot = state.status.snapshot();
    Json(build_figure(&snapshot, &state.satellite))
}
