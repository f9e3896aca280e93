use crate::prelude::{ensure_same_length, TrajectoryError, TrajectoryResult};

/// Piecewise-linear interpolant over `(x, y)` breakpoints.
///
/// Breakpoints are taken in the order given and must be non-decreasing.
/// Evaluation never extrapolates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterpolant {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> TrajectoryResult<Self> {
        ensure_same_length("interpolant values", x.len(), y.len())?;
        if x.len() < 2 {
            return Err(TrajectoryError::InsufficientSamples(format!(
                "linear interpolation needs at least 2 breakpoints, got {}",
                x.len()
            )));
        }
        if let Some(i) = (1..x.len()).find(|&i| !(x[i] >= x[i - 1])) {
            return Err(TrajectoryError::UnorderedTime(format!(
                "breakpoint {} ({}) precedes breakpoint {} ({})",
                i,
                x[i],
                i - 1,
                x[i - 1]
            )));
        }
        Ok(Self { x, y })
    }

    /// Inclusive `(min, max)` range of valid query points.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    pub fn breakpoints(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    pub fn evaluate(&self, t: f64) -> TrajectoryResult<f64> {
        let (min, max) = self.domain();
        if t.is_nan() || t < min || t > max {
            return Err(TrajectoryError::Domain {
                requested: t,
                min,
                max,
            });
        }

        // Rightmost breakpoint at or before `t`, so a repeated time resolves
        // to its last copy.
        let lo = self.x.partition_point(|&v| v <= t) - 1;
        if self.x[lo] == t {
            return Ok(self.y[lo]);
        }

        let hi = lo + 1;
        let slope = (self.y[hi] - self.y[lo]) / (self.x[hi] - self.x[lo]);
        let value = slope * (t - self.x[lo]) + self.y[lo];
        if value.is_nan() {
            let from_right = slope * (t - self.x[hi]) + self.y[hi];
            if from_right.is_nan() && self.y[lo] == self.y[hi] {
                return Ok(self.y[lo]);
            }
            return Ok(from_right);
        }
        Ok(value)
    }

    /// Evaluates every point, stopping at the first one outside the domain.
    pub fn evaluate_many(&self, ts: &[f64]) -> TrajectoryResult<Vec<f64>> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }
}
