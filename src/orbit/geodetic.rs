// WGS-84 constants
pub const EARTH_RADIUS_KM: f64 = 6378.137;
pub const EARTH_ECC_SQ: f64 = 0.00669437999014;

/// Rotate a TEME position into the Earth-fixed frame by the Greenwich mean
/// sidereal angle.
pub fn teme_to_ecef(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let cos_gmst = gmst.cos();
    let sin_gmst = gmst.sin();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

/// Earth-fixed Cartesian (km) to geodetic latitude/longitude (deg) and
/// altitude above the WGS-84 ellipsoid (km), by fixed-point iteration on the
/// latitude.
pub fn ecef_to_geodetic(ecef: [f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = ecef;
    let p = (x * x + y * y).sqrt();
    let lon = y.atan2(x);

    let mut lat = z.atan2(p * (1.0 - EARTH_ECC_SQ));
    let mut n = EARTH_RADIUS_KM;
    for _ in 0..5 {
        let sin_lat = lat.sin();
        n = EARTH_RADIUS_KM / (1.0 - EARTH_ECC_SQ * sin_lat * sin_lat).sqrt();
        lat = (z + EARTH_ECC_SQ * n * sin_lat).atan2(p);
    }

    let cos_lat = lat.cos();
    let alt = if cos_lat.abs() > 1e-10 {
        p / cos_lat - n
    } else {
        // Polar singularity: fall back to the minor-axis radius.
        z.abs() - n * (1.0 - EARTH_ECC_SQ)
    };

    (
        clamp_latitude(lat.to_degrees()),
        normalize_longitude(lon.to_degrees()),
        alt,
    )
}

pub fn clamp_latitude(lat_deg: f64) -> f64 {
    lat_deg.clamp(-90.0, 90.0)
}

/// Wrap into [-180, 180].
pub fn normalize_longitude(lon_deg: f64) -> f64 {
    let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    wrapped.clamp(-180.0, 180.0)
}
