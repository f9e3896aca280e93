use std::f64::consts::PI;

/// Semi-major (equatorial) axis in meters.
pub const WGS84_A: f64 = 6378137.0;

/// Semi-minor (polar) axis in meters.
pub const WGS84_B: f64 = 6356752.31424518;

/// Degrees to radians, applied as a multiplication so results match the
/// historical logs bit for bit.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Kilometers to meters.
pub const KM_TO_M: f64 = 1000.0;

/// First eccentricity, `sqrt((A² − B²) / A²)`.
pub fn first_eccentricity() -> f64 {
    let a_sq = WGS84_A.powi(2);
    ((a_sq - WGS84_B.powi(2)) / a_sq).sqrt()
}

/// Square of the first eccentricity, computed from [`first_eccentricity`]
/// rather than from the axes directly.
pub fn eccentricity_squared() -> f64 {
    first_eccentricity().powi(2)
}

/// Prime-vertical radius of curvature at a latitude given in radians.
pub fn prime_vertical_radius(lat_rad: f64) -> f64 {
    let sin_lat = lat_rad.sin();
    WGS84_A / (1.0 - eccentricity_squared() * sin_lat.powi(2)).sqrt()
}
