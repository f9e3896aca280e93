//! WGS84 geodetic (latitude, longitude, altitude) to ECEF conversion.

pub mod ecef;
pub mod wgs84;

pub use ecef::{geodetic_to_ecef, lla_to_ecef, EcefTrack};
pub use wgs84::{prime_vertical_radius, WGS84_A, WGS84_B};
