use chrono::DateTime;
use serde::Serialize;

/// One sub-satellite point with its derived scalars. Recomputed every tick,
/// never persisted.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct GeodeticSample {
    pub timestamp: DateTime<chrono::Utc>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub speed_km_s: f64,
}
