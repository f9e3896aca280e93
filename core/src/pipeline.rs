use crate::geodesy::{lla_to_ecef, EcefTrack};
use crate::ingest::{load_samples, SampleTable};
use crate::interpolation::LinearInterpolant;
use crate::kinematics::{estimate_speed, SpeedSeries};
use crate::prelude::{FirstSamplePolicy, TrajectoryError, TrajectoryResult};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Everything derived from one trajectory log: the samples, their ECEF
/// positions and the speed series.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryProfile {
    pub samples: SampleTable,
    pub positions: EcefTrack,
    pub speed: SpeedSeries,
}

impl TrajectoryProfile {
    pub fn from_table(samples: SampleTable, policy: FirstSamplePolicy) -> TrajectoryResult<Self> {
        let positions = lla_to_ecef(
            &samples.latitudes(),
            &samples.longitudes(),
            &samples.altitudes(),
        )?;
        let speed = estimate_speed(&samples.times(), &positions, policy)?;
        Ok(Self {
            samples,
            positions,
            speed,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P, policy: FirstSamplePolicy) -> TrajectoryResult<Self> {
        Self::from_table(load_samples(path)?, policy)
    }

    pub fn interpolant(&self) -> TrajectoryResult<LinearInterpolant> {
        self.speed.interpolant()
    }

    /// Pretty-printed JSON export. Non-finite speeds are written as `null`.
    pub fn write_json<W: Write>(&self, writer: W) -> TrajectoryResult<()> {
        serde_json::to_writer_pretty(writer, self).map_err(|err| TrajectoryError::Sink {
            target: "json export".into(),
            source: err.into(),
        })
    }
}
