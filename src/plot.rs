//! Display adapter: pure mapping from the dashboard snapshot to the chart
//! library's plot-record shape. No side effects; the page hands the figure
//! straight to Plotly.

use serde::Serialize;
use utoipa::ToSchema;

use crate::orbit::TrackPoint;
use crate::state::{DashboardMode, DashboardStatus};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlotFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Marker {
    pub size: u32,
    pub color: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Line {
    pub width: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Layout {
    pub geo: Geo,
    pub height: u32,
    pub margin: Margin,
    pub showlegend: bool,
    pub paper_bgcolor: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Geo {
    pub projection: Projection,
    pub showland: bool,
    pub showocean: bool,
    pub showcoastlines: bool,
    pub showcountries: bool,
    pub oceancolor: String,
    pub landcolor: String,
    pub coastlinecolor: String,
    pub countrycolor: String,
    pub bgcolor: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Projection {
    #[serde(rename = "type")]
    pub projection_type: String,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Rotation {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

/// `None` while the dashboard is still loading; the page shows a spinner
/// instead of a plot. Once a position exists, the figure carries the marker,
/// both path traces, and an orthographic projection centered on the marker.
pub fn build_figure(status: &DashboardStatus, satellite: &str) -> Option<PlotFigure> {
    if status.mode == DashboardMode::Loading {
        return None;
    }
    let position = status.position.as_ref()?;

    let mut data = Vec::with_capacity(3);

    if !status.track.ground_track.is_empty() {
        data.push(line_trace(
            &status.track.ground_track,
            "Ground track",
            "#4A5568",
            Some("dot".to_string()),
            1.0,
        ));
    }
    if !status.track.orbit_path.is_empty() {
        data.push(line_trace(
            &status.track.orbit_path,
            "Orbit path",
            "#3182CE",
            None,
            1.5,
        ));
    }

    data.push(Trace {
        trace_type: "scattergeo".to_string(),
        mode: "markers+text".to_string(),
        lon: vec![position.longitude_deg],
        lat: vec![position.latitude_deg],
        name: satellite.to_string(),
        text: Some(vec![satellite.to_string()]),
        textposition: Some("top".to_string()),
        marker: Some(Marker {
            size: 12,
            color: "#FF4136".to_string(),
            symbol: "star".to_string(),
        }),
        line: None,
    });

    Some(PlotFigure {
        data,
        layout: Layout {
            geo: Geo {
                projection: Projection {
                    projection_type: "orthographic".to_string(),
                    rotation: Rotation {
                        lon: position.longitude_deg,
                        lat: position.latitude_deg,
                    },
                },
                showland: true,
                showocean: true,
                showcoastlines: true,
                showcountries: true,
                oceancolor: "#1A365D".to_string(),
                landcolor: "#2D3748".to_string(),
                coastlinecolor: "#4A5568".to_string(),
                countrycolor: "#4A5568".to_string(),
                bgcolor: "rgba(0,0,0,0)".to_string(),
            },
            height: 600,
            margin: Margin {
                t: 0,
                b: 0,
                l: 0,
                r: 0,
            },
            showlegend: false,
            paper_bgcolor: "rgba(0,0,0,0)".to_string(),
        },
    })
}

fn line_trace(
    points: &[TrackPoint],
    name: &str,
    color: &str,
    dash: Option<String>,
    width: f64,
) -> Trace {
    Trace {
        trace_type: "scattergeo".to_string(),
        mode: "lines".to_string(),
        lon: points.iter().map(|p| p.longitude_deg).collect(),
        lat: points.iter().map(|p| p.latitude_deg).collect(),
        name: name.to_string(),
        text: None,
        textposition: None,
        marker: None,
        line: Some(Line {
            width,
            color: color.to_string(),
            dash,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::{GeodeticSample, TrackSet};
    use chrono::{TimeZone, Utc};

    fn ready_status() -> DashboardStatus {
        let point = |lon: f64, lat: f64| TrackPoint {
            longitude_deg: lon,
            latitude_deg: lat,
        };
        DashboardStatus {
            mode: DashboardMode::Ready,
            position: Some(GeodeticSample {
                timestamp: Utc.with_ymd_and_hms(2024, 7, 12, 0, 0, 0).unwrap(),
                latitude_deg: -47.4,
                longitude_deg: 151.0,
                altitude_m: 420_000.0,
                speed_km_s: 7.66,
            }),
            track: TrackSet {
                orbit_path: vec![point(0.0, 0.0), point(1.0, 2.0)],
                ground_track: vec![point(0.0, 0.0)],
            },
            stats: None,
        }
    }

    #[test]
    fn loading_state_has_no_figure() {
        let status = DashboardStatus {
            mode: DashboardMode::Loading,
            position: None,
            track: TrackSet::default(),
            stats: None,
        };
        assert!(build_figure(&status, "ISS").is_none());
    }

    #[test]
    fn figure_has_marker_and_both_paths() {
        let figure = build_figure(&ready_status(), "ISS").unwrap();
        assert_eq!(figure.data.len(), 3);

        let marker = figure.data.last().unwrap();
        assert_eq!(marker.mode, "markers+text");
        assert_eq!(marker.lon, vec![151.0]);
        assert_eq!(marker.lat, vec![-47.4]);
    }

    #[test]
    fn projection_follows_current_position() {
        let figure = build_figure(&ready_status(), "ISS").unwrap();
        let rotation = &figure.layout.geo.projection.rotation;
        assert_eq!(rotation.lon, 151.0);
        assert_eq!(rotation.lat, -47.4);
    }

    #[test]
    fn empty_track_still_renders_marker() {
        let mut status = ready_status();
        status.track = TrackSet::default();
        let figure = build_figure(&status, "ISS").unwrap();
        assert_eq!(figure.data.len(), 1);
    }

    #[test]
    fn serializes_plotly_record_shape() {
        let figure = build_figure(&ready_status(), "ISS").unwrap();
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["type"], "scattergeo");
        assert_eq!(
            json["layout"]["geo"]["projection"]["type"],
            "orthographic"
        );
        // Line traces carry no marker key at all.
        assert!(json["data"][0].get("marker").is_none());
    }
}
