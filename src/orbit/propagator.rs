use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::orbit::geodetic::{ecef_to_geodetic, teme_to_ecef};
use crate::orbit::parsing::parse_tle_lines;
use crate::orbit::sample::GeodeticSample;
use crate::orbit::OrbitError;

/// SGP4 propagator bound to one element set for the session.
pub struct Propagator {
    elements: Elements,
    constants: Constants,
}

impl Propagator {
    pub fn from_tle(tle: &str) -> Result<Self, OrbitError> {
        let (name, line1, line2) = parse_tle_lines(tle)?;
        let elements = Elements::from_tle(name, line1.as_bytes(), line2.as_bytes())?;
        let constants = Constants::from_elements(&elements)?;
        Ok(Self {
            elements,
            constants,
        })
    }

    pub fn object_name(&self) -> Option<&str> {
        self.elements.object_name.as_deref()
    }

    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }

    /// Propagate to `timestamp` and reduce the TEME state to a geodetic
    /// sub-satellite point.
    pub fn sample_at(&self, timestamp: DateTime<Utc>) -> Result<GeodeticSample, OrbitError> {
        let minutes = self
            .elements
            .datetime_to_minutes_since_epoch(&timestamp.naive_utc())
            .map_err(|e| OrbitError::Propagation(e.to_string()))?;

        let prediction = self
            .constants
            .propagate(minutes)
            .map_err(|e| OrbitError::Propagation(e.to_string()))?;

        let gmst = sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(
            &timestamp.naive_utc(),
        ));

        let ecef = teme_to_ecef(prediction.position, gmst);
        let (latitude_deg, longitude_deg, altitude_km) = ecef_to_geodetic(ecef);

        let [vx, vy, vz] = prediction.velocity;
        let speed_km_s = (vx * vx + vy * vy + vz * vz).sqrt();

        Ok(GeodeticSample {
            timestamp,
            latitude_deg,
            longitude_deg,
            altitude_m: altitude_km * 1000.0,
            speed_km_s,
        })
    }
}
