use crate::geodesy::wgs84::{eccentricity_squared, DEG_TO_RAD, KM_TO_M, WGS84_A};
use crate::prelude::{ensure_same_length, EcefPosition, TrajectoryResult};
use serde::{Deserialize, Serialize};

/// Column-oriented ECEF positions, index-aligned with the samples they came
/// from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcefTrack {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl EcefTrack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, position: EcefPosition) {
        self.x.push(position.x);
        self.y.push(position.y);
        self.z.push(position.z);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<EcefPosition> {
        Some(EcefPosition {
            x: *self.x.get(index)?,
            y: *self.y.get(index)?,
            z: *self.z.get(index)?,
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = EcefPosition> + '_ {
        (0..self.len()).filter_map(|i| self.position(i))
    }
}

/// Converts a single WGS84 sample to ECEF meters.
///
/// Latitude and longitude are in degrees, altitude in kilometers. Ranges are
/// not checked: out-of-range angles produce well-defined but meaningless
/// positions and NaN/Inf input flows straight through.
pub fn geodetic_to_ecef(latitude: f64, longitude: f64, altitude_km: f64) -> EcefPosition {
    let lat = DEG_TO_RAD * latitude;
    let lon = DEG_TO_RAD * longitude;
    let h = KM_TO_M * altitude_km;

    let cos_lat = lat.cos();
    let cos_lon = lon.cos();
    let sin_lat = lat.sin();

    let e2 = eccentricity_squared();
    let n = WGS84_A / (1.0 - e2 * sin_lat.powi(2)).sqrt();

    EcefPosition {
        x: (n + h) * cos_lat * cos_lon,
        y: (n + h) * cos_lat * lon.sin(),
        z: (n * (1.0 - e2) + h) * sin_lat,
    }
}

/// Converts latitude, longitude and altitude columns to an [`EcefTrack`].
pub fn lla_to_ecef(
    latitudes: &[f64],
    longitudes: &[f64],
    altitudes: &[f64],
) -> TrajectoryResult<EcefTrack> {
    ensure_same_length("longitude", latitudes.len(), longitudes.len())?;
    ensure_same_length("altitude", latitudes.len(), altitudes.len())?;

    let mut track = EcefTrack::with_capacity(latitudes.len());
    for ((&lat, &lon), &alt) in latitudes.iter().zip(longitudes).zip(altitudes) {
        track.push(geodetic_to_ecef(lat, lon, alt));
    }
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::wgs84::{prime_vertical_radius, WGS84_B};
    use crate::prelude::TrajectoryError;

    #[test]
    fn equator_prime_meridian_sits_on_semi_major_axis() {
        let p = geodetic_to_ecef(0.0, 0.0, 0.0);
        assert_eq!(p.x, WGS84_A);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
        let radius = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
        assert!(((radius - WGS84_A) / WGS84_A).abs() < 1e-6);
    }

    #[test]
    fn north_pole_sits_on_semi_minor_axis() {
        let p = geodetic_to_ecef(90.0, 0.0, 0.0);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!((p.z - WGS84_B).abs() < 1e-6);
    }

    #[test]
    fn altitude_is_taken_in_kilometers() {
        let p = geodetic_to_ecef(0.0, 90.0, 1.5);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - (WGS84_A + 1500.0)).abs() < 1e-6);
    }

    #[test]
    fn horizontal_radius_matches_prime_vertical_identity() {
        for &(lat, lon, alt) in &[(45.0, -120.5, 10.0), (-33.9, 151.2, 0.05), (71.3, 359.0, 2.0)] {
            let p = geodetic_to_ecef(lat, lon, alt);
            let lat_rad = DEG_TO_RAD * lat;
            let expected =
                (prime_vertical_radius(lat_rad) + alt * 1000.0).powi(2) * lat_rad.cos().powi(2);
            let actual = p.x * p.x + p.y * p.y;
            assert!(((actual - expected) / expected).abs() < 1e-12);
        }
    }

    #[test]
    fn track_is_index_aligned() {
        let track = lla_to_ecef(&[0.0, 90.0], &[0.0, 0.0], &[0.0, 0.0]).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track.position(0).unwrap(), geodetic_to_ecef(0.0, 0.0, 0.0));
        assert_eq!(track.positions().count(), 2);
    }

    #[test]
    fn nan_input_propagates() {
        let p = geodetic_to_ecef(f64::NAN, 0.0, 0.0);
        assert!(p.x.is_nan() && p.z.is_nan());
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = lla_to_ecef(&[0.0, 1.0], &[0.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, TrajectoryError::LengthMismatch(_)));
    }
}
