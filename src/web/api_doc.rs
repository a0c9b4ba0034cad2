use utoipa::OpenApi;

use crate::orbit::{GeodeticSample, OrbitalStats, TrackPoint, TrackSet};
use crate::plot::{Geo, Layout, Line, Margin, Marker, PlotFigure, Projection, Rotation, Trace};
use crate::state::DashboardMode;

use super::api::dashboard::StatusResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::dashboard::status,
        super::api::dashboard::position,
        super::api::dashboard::track,
        super::api::dashboard::stats,
        super::api::dashboard::plot,
    ),
    components(
        schemas(
            StatusResponse,
            DashboardMode,
            GeodeticSample,
            OrbitalStats,
            TrackSet,
            TrackPoint,
            PlotFigure,
            Trace,
            Marker,
            Line,
            Layout,
            Geo,
            Projection,
            Rotation,
            Margin,
        )
    ),
    info(
        title = "Globetrack Dashboard API",
        description = "Read-only API feeding the live satellite tracker page",
        version = "0.1.0"
    ),
    tags(
        (name = "dashboard", description = "Current position, predicted tracks and orbital stats")
    )
)]
pub struct ApiDoc;
