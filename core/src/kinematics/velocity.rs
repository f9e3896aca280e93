use crate::geodesy::EcefTrack;
use crate::kinematics::series::SpeedSeries;
use crate::prelude::{ensure_same_length, FirstSamplePolicy, TrajectoryError, TrajectoryResult};
use crate::telemetry::log::LogManager;
use log::warn;
use ndarray::{s, Array1, ArrayView1};

/// Backward-difference velocity of one position component.
///
/// Element 0 is zero; element `i` is `(p[i] - p[i-1]) / (t[i] - t[i-1])`.
/// Equal consecutive timestamps divide by zero and leave ±Inf or NaN in place.
pub fn backward_difference(time: &[f64], position: &[f64]) -> TrajectoryResult<Vec<f64>> {
    component_velocity(time, position).map(|v| v.to_vec())
}

fn component_velocity(time: &[f64], position: &[f64]) -> TrajectoryResult<Array1<f64>> {
    ensure_same_length("position component", time.len(), position.len())?;

    let mut velocity = Array1::<f64>::zeros(position.len());
    if position.len() > 1 {
        let t = ArrayView1::from(time);
        let p = ArrayView1::from(position);
        let dp = &p.slice(s![1..]) - &p.slice(s![..-1]);
        let dt = &t.slice(s![1..]) - &t.slice(s![..-1]);
        velocity.slice_mut(s![1..]).assign(&(dp / dt));
    }
    Ok(velocity)
}

/// Estimates scalar speed from ECEF positions.
///
/// Each component is differenced independently and the results are combined
/// as `sqrt(vx² + vy² + vz²)`. The first sample has no predecessor; `policy`
/// decides whether it is reported as zero, NaN or dropped.
pub fn estimate_speed(
    time: &[f64],
    track: &EcefTrack,
    policy: FirstSamplePolicy,
) -> TrajectoryResult<SpeedSeries> {
    if time.is_empty() {
        return Err(TrajectoryError::InsufficientSamples(
            "velocity needs at least one sample".into(),
        ));
    }

    let vx = component_velocity(time, &track.x)?;
    let vy = component_velocity(time, &track.y)?;
    let vz = component_velocity(time, &track.z)?;
    let mut speed = (vx.mapv(|v| v * v) + vy.mapv(|v| v * v) + vz.mapv(|v| v * v)).mapv(f64::sqrt);

    let mut times = time.to_vec();
    match policy {
        FirstSamplePolicy::Zero => {}
        FirstSamplePolicy::Nan => speed[0] = f64::NAN,
        FirstSamplePolicy::Drop => {
            times.remove(0);
            speed = speed.slice(s![1..]).to_owned();
        }
    }

    let series = SpeedSeries::new(times, speed.to_vec(), policy)?;
    let anomalies = series.anomalies();
    if !anomalies.is_empty() {
        warn!(
            "{} non-finite speed sample(s), first at index {}",
            anomalies.len(),
            anomalies[0]
        );
    }
    LogManager::new().record(&format!(
        "Estimated {} speed samples ({:?} first sample)",
        series.len(),
        policy
    ));
    Ok(series)
}
