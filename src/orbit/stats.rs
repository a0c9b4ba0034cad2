use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::orbit::parsing::{fixed_f64, fixed_field};
use crate::orbit::OrbitError;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Orbital parameters read straight out of the element set's fixed columns.
/// Static for the lifetime of one element set.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrbitalStats {
    pub period_minutes: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_motion_rev_day: f64,
    pub epoch: DateTime<Utc>,
}

impl OrbitalStats {
    /// Derive stats from the two element lines. Column indices follow the
    /// TLE format definition and must stay byte-compatible with it:
    /// inclination at line 2 [8..16], eccentricity at [26..33] (implied
    /// "0." prefix), mean motion at [52..63]; epoch year at line 1 [18..20]
    /// and fractional day-of-year at [20..32].
    pub fn from_tle_lines(line1: &str, line2: &str) -> Result<Self, OrbitError> {
        let inclination_deg = fixed_f64(line2, 8, 16, "inclination")?;

        let ecc_raw = fixed_field(line2, 26, 33, "eccentricity")?;
        let eccentricity: f64 = format!("0.{}", ecc_raw.trim()).parse().map_err(|_| {
            OrbitError::MalformedField {
                field: "eccentricity",
                value: ecc_raw.to_string(),
            }
        })?;

        let mean_motion_rev_day = fixed_f64(line2, 52, 63, "mean motion")?;
        if !mean_motion_rev_day.is_finite() || mean_motion_rev_day <= 0.0 {
            return Err(OrbitError::MalformedField {
                field: "mean motion",
                value: mean_motion_rev_day.to_string(),
            });
        }
        let period_minutes = MINUTES_PER_DAY / mean_motion_rev_day;

        let epoch = decode_epoch(line1)?;

        Ok(Self {
            period_minutes,
            eccentricity,
            inclination_deg,
            mean_motion_rev_day,
            epoch,
        })
    }
}

/// Two-digit epoch year plus fractional day of year. Years below 57 are
/// 2000s, the rest 1900s.
fn decode_epoch(line1: &str) -> Result<DateTime<Utc>, OrbitError> {
    let year_raw = fixed_field(line1, 18, 20, "epoch year")?;
    let yy: i32 = year_raw.trim().parse().map_err(|_| OrbitError::MalformedField {
        field: "epoch year",
        value: year_raw.to_string(),
    })?;
    let year = if yy < 57 { 2000 + yy } else { 1900 + yy };

    let day = fixed_f64(line1, 20, 32, "epoch day")?;
    if !day.is_finite() || day < 1.0 {
        return Err(OrbitError::MalformedField {
            field: "epoch day",
            value: day.to_string(),
        });
    }

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(OrbitError::MalformedField {
            field: "epoch year",
            value: year.to_string(),
        })?
        .and_utc();

    // Day 1.0 is January 1st, 00:00 UTC.
    let offset_ms = ((day - 1.0) * 86_400_000.0).round() as i64;
    Ok(jan1 + Duration::milliseconds(offset_ms))
}
