use crate::interpolation::LinearInterpolant;
use crate::prelude::{ensure_same_length, FirstSamplePolicy, SampleStatus, TrajectoryResult};
use serde::{Deserialize, Serialize};

/// Scalar speed in m/s, index-aligned with the times it was derived from.
///
/// Non-finite values are kept as raw floats; [`SpeedSeries::status`] exposes
/// them without changing the numbers written to reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedSeries {
    time: Vec<f64>,
    speed: Vec<f64>,
    policy: FirstSamplePolicy,
}

impl SpeedSeries {
    pub fn new(
        time: Vec<f64>,
        speed: Vec<f64>,
        policy: FirstSamplePolicy,
    ) -> TrajectoryResult<Self> {
        ensure_same_length("speed", time.len(), speed.len())?;
        Ok(Self {
            time,
            speed,
            policy,
        })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn speed(&self) -> &[f64] {
        &self.speed
    }

    pub fn policy(&self) -> FirstSamplePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }

    pub fn status(&self, index: usize) -> Option<SampleStatus> {
        self.speed.get(index).copied().map(SampleStatus::classify)
    }

    pub fn statuses(&self) -> Vec<SampleStatus> {
        self.speed.iter().copied().map(SampleStatus::classify).collect()
    }

    /// Indices whose speed is infinite or NaN.
    pub fn anomalies(&self) -> Vec<usize> {
        self.speed
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn interpolant(&self) -> TrajectoryResult<LinearInterpolant> {
        LinearInterpolant::new(self.time.clone(), self.speed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::TrajectoryError;

    #[test]
    fn series_requires_aligned_columns() {
        let err = SpeedSeries::new(vec![0.0, 1.0], vec![0.0], FirstSamplePolicy::Zero).unwrap_err();
        assert!(matches!(err, TrajectoryError::LengthMismatch(_)));
    }

    #[test]
    fn statuses_follow_values() {
        let series = SpeedSeries::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, f64::NEG_INFINITY, f64::NAN],
            FirstSamplePolicy::Zero,
        )
        .unwrap();
        assert_eq!(
            series.statuses(),
            vec![
                SampleStatus::Finite,
                SampleStatus::Infinite,
                SampleStatus::NotANumber
            ]
        );
        assert_eq!(series.status(3), None);
    }
}
