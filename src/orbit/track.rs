use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::orbit::propagator::Propagator;
use crate::orbit::OrbitError;

/// Every Nth dense point goes into the lightweight ground-track overlay.
pub const GROUND_TRACK_DECIMATION: usize = 5;

/// Upper bound on one sweep. Two days of 1-minute steps covers any orbit
/// the globe can sensibly draw; a near-zero mean motion must not turn one
/// cycle into billions of propagations.
pub const MAX_TRACK_POINTS: usize = 2880;

const STEP: Duration = Duration::minutes(1);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TrackPoint {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

/// One cycle's predicted path pair. Regenerated wholesale; never mutated in
/// place.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct TrackSet {
    pub orbit_path: Vec<TrackPoint>,
    pub ground_track: Vec<TrackPoint>,
}

/// Sweep one orbital period ahead of `start` in 1-minute steps. The dense
/// path has round(period_minutes) points, capped at [`MAX_TRACK_POINTS`];
/// the ground track keeps every 5th. A non-positive or non-finite period
/// yields empty sequences.
pub fn build_track_set(
    propagator: &Propagator,
    period_minutes: f64,
    start: DateTime<Utc>,
) -> Result<TrackSet, OrbitError> {
    if !period_minutes.is_finite() || period_minutes.round() < 1.0 {
        return Ok(TrackSet::default());
    }
    let steps = (period_minutes.round() as usize).min(MAX_TRACK_POINTS);

    let mut orbit_path = Vec::with_capacity(steps);
    let mut ground_track = Vec::with_capacity(steps / GROUND_TRACK_DECIMATION + 1);

    for i in 0..steps {
        let t = start + STEP * i as i32;
        let sample = propagator.sample_at(t)?;
        let point = TrackPoint {
            longitude_deg: sample.longitude_deg,
            latitude_deg: sample.latitude_deg,
        };
        orbit_path.push(point);
        if i % GROUND_TRACK_DECIMATION == 0 {
            ground_track.push(point);
        }
    }

    Ok(TrackSet {
        orbit_path,
        ground_track,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ISS_TLE: &str = "ISS (ZARYA)\n\
        1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992\n\
        2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008\n";

    fn iss() -> Propagator {
        Propagator::from_tle(ISS_TLE).unwrap()
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 7, 12, 22, 0, 0).unwrap()
    }

    #[test]
    fn dense_count_is_rounded_period() {
        // 1440 / 15.49507896 rev/day = 92.93 min -> 93 steps.
        let track = build_track_set(&iss(), 92.93, start()).unwrap();
        assert_eq!(track.orbit_path.len(), 93);
        assert_eq!(track.ground_track.len(), 19); // ceil(93 / 5)
    }

    #[test]
    fn ground_track_is_every_fifth_point() {
        let track = build_track_set(&iss(), 92.93, start()).unwrap();
        for (i, point) in track.ground_track.iter().enumerate() {
            assert_eq!(*point, track.orbit_path[i * GROUND_TRACK_DECIMATION]);
        }
    }

    #[test]
    fn coordinates_stay_in_range() {
        let track = build_track_set(&iss(), 92.93, start()).unwrap();
        for p in &track.orbit_path {
            assert!(p.latitude_deg >= -90.0 && p.latitude_deg <= 90.0);
            assert!(p.longitude_deg >= -180.0 && p.longitude_deg <= 180.0);
        }
    }

    #[test]
    fn absurd_period_is_capped() {
        // Mean motion 1e-8 rev/day parses fine but implies a 1.44e11-minute
        // period; the sweep must stop at the cap instead of looping on it.
        let track = build_track_set(&iss(), 1.44e11, start()).unwrap();
        assert_eq!(track.orbit_path.len(), MAX_TRACK_POINTS);
        assert_eq!(
            track.ground_track.len(),
            MAX_TRACK_POINTS / GROUND_TRACK_DECIMATION
        );
    }

    #[test]
    fn non_positive_period_yields_empty_tracks() {
        for period in [0.0, -5.0, 0.4, f64::NAN, f64::INFINITY] {
            let track = build_track_set(&iss(), period, start()).unwrap();
            assert!(track.orbit_path.is_empty());
            assert!(track.ground_track.is_empty());
        }
    }
}
