use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::orbit::geodetic::{clamp_latitude, normalize_longitude};
use crate::orbit::{GeodeticSample, OrbitError, Propagator};

const REMOTE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("orbit error: {0}")]
    Orbit(#[from] OrbitError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed response field {field}: {value:?}")]
    MalformedResponse { field: &'static str, value: String },
}

/// Where the position poller gets its sample: the local SGP4 propagator or a
/// remote JSON endpoint.
pub enum PositionSource {
    Propagator(Arc<Propagator>),
    Remote(RemoteClient),
}

impl PositionSource {
    pub async fn fetch(&self, now: DateTime<Utc>) -> Result<GeodeticSample, SourceError> {
        match self {
            PositionSource::Propagator(propagator) => Ok(propagator.sample_at(now)?),
            PositionSource::Remote(client) => client.fetch_position(now).await,
        }
    }
}

/// Client for the remote position endpoint. The payload encodes latitude and
/// longitude as strings; altitude and speed are not reported.
pub struct RemoteClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RemotePayload {
    iss_position: RemotePosition,
}

#[derive(Debug, Deserialize)]
struct RemotePosition {
    latitude: String,
    longitude: String,
}

impl RemoteClient {
    pub fn new(url: String) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(REMOTE_TIMEOUT).build()?;
        Ok(Self { client, url })
    }

    pub async fn fetch_position(
        &self,
        now: DateTime<Utc>,
    ) -> Result<GeodeticSample, SourceError> {
        let payload: RemotePayload = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        payload_to_sample(payload, now)
    }
}

fn payload_to_sample(
    payload: RemotePayload,
    now: DateTime<Utc>,
) -> Result<GeodeticSample, SourceError> {
    let latitude: f64 = payload.iss_position.latitude.trim().parse().map_err(|_| {
        SourceError::MalformedResponse {
            field: "latitude",
            value: payload.iss_position.latitude.clone(),
        }
    })?;
    let longitude: f64 = payload.iss_position.longitude.trim().parse().map_err(|_| {
        SourceError::MalformedResponse {
            field: "longitude",
            value: payload.iss_position.longitude.clone(),
        }
    })?;

    Ok(GeodeticSample {
        timestamp: now,
        latitude_deg: clamp_latitude(latitude),
        longitude_deg: normalize_longitude(longitude),
        altitude_m: 0.0,
        speed_km_s: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 12, 0, 0, 0).unwrap()
    }

    #[test]
    fn builds_client_with_timeout() {
        assert!(RemoteClient::new("http://example.org/position.json".to_string()).is_ok());
    }

    #[test]
    fn parses_string_encoded_coordinates() {
        let payload: RemotePayload = serde_json::from_str(
            r#"{"message": "success", "timestamp": 1720742400,
                "iss_position": {"latitude": "-47.3654", "longitude": "151.0452"}}"#,
        )
        .unwrap();
        let sample = payload_to_sample(payload, now()).unwrap();
        assert!((sample.latitude_deg + 47.3654).abs() < 1e-9);
        assert!((sample.longitude_deg - 151.0452).abs() < 1e-9);
        assert_eq!(sample.altitude_m, 0.0);
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let payload: RemotePayload = serde_json::from_str(
            r#"{"iss_position": {"latitude": "north-ish", "longitude": "0.0"}}"#,
        )
        .unwrap();
        assert!(matches!(
            payload_to_sample(payload, now()),
            Err(SourceError::MalformedResponse { field: "latitude", .. })
        ));
    }
}
