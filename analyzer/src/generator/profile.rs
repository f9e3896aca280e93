use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use trajcore::geodesy::wgs84::{eccentricity_squared, prime_vertical_radius, DEG_TO_RAD, WGS84_A};
use trajcore::ingest::{write_samples, SampleTable};
use trajcore::GeodeticSample;

/// Configuration for generating a synthetic trajectory log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seconds since the Unix epoch of the first sample.
    pub start_time: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    /// Horizontal speed in m/s.
    pub ground_speed: f64,
    /// Degrees clockwise from north.
    pub heading: f64,
    /// Vertical speed in m/s.
    pub climb_rate: f64,
    pub interval: f64,
    pub samples: usize,
    /// Uniform horizontal position jitter in meters.
    pub noise: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_time: 1532332859.0,
            latitude: 45.0,
            longitude: -120.0,
            altitude_km: 10.0,
            ground_speed: 250.0,
            heading: 90.0,
            climb_rate: 0.0,
            interval: 1.0,
            samples: 2500,
            noise: 0.0,
            seed: 0,
        }
    }
}

fn meridian_radius(lat_rad: f64) -> f64 {
    let e2 = eccentricity_squared();
    WGS84_A * (1.0 - e2) / (1.0 - e2 * lat_rad.sin().powi(2)).powf(1.5)
}

/// Dead-reckons a constant-heading track over the WGS84 ellipsoid.
pub fn build_trajectory(config: &GeneratorConfig) -> SampleTable {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let heading = config.heading * DEG_TO_RAD;
    let interval = config.interval.max(f64::EPSILON);

    let mut latitude = config.latitude;
    let mut longitude = config.longitude;
    let mut altitude_m = config.altitude_km * 1000.0;
    let mut samples = Vec::with_capacity(config.samples);

    for index in 0..config.samples {
        let (jitter_north, jitter_east) = if config.noise > 0.0 {
            (
                rng.gen_range(-config.noise..config.noise),
                rng.gen_range(-config.noise..config.noise),
            )
        } else {
            (0.0, 0.0)
        };
        let lat_rad = latitude * DEG_TO_RAD;
        let north_scale = meridian_radius(lat_rad) + altitude_m;
        let east_scale = (prime_vertical_radius(lat_rad) + altitude_m) * lat_rad.cos();

        samples.push(GeodeticSample {
            time: config.start_time + index as f64 * interval,
            latitude: latitude + jitter_north / north_scale / DEG_TO_RAD,
            longitude: longitude + jitter_east / east_scale / DEG_TO_RAD,
            altitude: altitude_m / 1000.0,
        });

        let step = config.ground_speed * interval;
        latitude += step * heading.cos() / north_scale / DEG_TO_RAD;
        longitude += step * heading.sin() / east_scale / DEG_TO_RAD;
        altitude_m += config.climb_rate * interval;
    }

    SampleTable::new(samples)
}

/// Writes a generated trajectory as CSV and returns the number of rows.
pub fn write_trajectory<P: AsRef<Path>>(
    path: P,
    config: &GeneratorConfig,
) -> anyhow::Result<usize> {
    let path_ref = path.as_ref();
    let table = build_trajectory(config);
    let file = File::create(path_ref)
        .with_context(|| format!("creating trajectory log {}", path_ref.display()))?;
    write_samples(file, &table)
        .with_context(|| format!("writing trajectory log {}", path_ref.display()))?;
    Ok(table.len())
}
