use crate::interpolation::LinearInterpolant;
use crate::kinematics::SpeedSeries;
use crate::pipeline::TrajectoryProfile;
use crate::prelude::{FirstSamplePolicy, TimeRequest, TrajectoryError, TrajectoryResult};
use crate::report::{AppendLogSink, ConsoleSink, ReportSink, VelocityReport};
use crate::telemetry::{LogManager, MetricsRecorder, QueryMetrics};
use std::path::Path;

/// Answers point-in-time velocity queries and forwards each answer to its
/// sinks in registration order.
///
/// The interpolation runs before any sink is touched, so a rejected query
/// leaves no trace in the log.
pub struct VelocityQueryService {
    sinks: Vec<Box<dyn ReportSink>>,
    policy: FirstSamplePolicy,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl VelocityQueryService {
    pub fn new(policy: FirstSamplePolicy) -> Self {
        Self {
            sinks: Vec::new(),
            policy,
            metrics: MetricsRecorder::new(),
            logger: LogManager::for_target("trajcore::service"),
        }
    }

    /// Append-only log at `log_path` followed by the console.
    pub fn with_log_file<P: AsRef<Path>>(log_path: P, policy: FirstSamplePolicy) -> Self {
        Self::new(policy)
            .with_sink(AppendLogSink::new(log_path))
            .with_sink(ConsoleSink)
    }

    pub fn with_sink<S: ReportSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn policy(&self) -> FirstSamplePolicy {
        self.policy
    }

    /// Answered queries and rejections by cause.
    pub fn metrics(&self) -> QueryMetrics {
        self.metrics.snapshot()
    }

    /// Interpolates an already computed speed series.
    pub fn query_series(
        &self,
        series: &SpeedSeries,
        request: impl Into<TimeRequest>,
    ) -> TrajectoryResult<VelocityReport> {
        let interpolant = series.interpolant().map_err(|err| self.reject(err))?;
        self.query_interpolant(&interpolant, request)
    }

    /// Interpolates raw `(time, speed)` columns.
    pub fn query_samples(
        &self,
        time: &[f64],
        speed: &[f64],
        request: impl Into<TimeRequest>,
    ) -> TrajectoryResult<VelocityReport> {
        let interpolant = LinearInterpolant::new(time.to_vec(), speed.to_vec())
            .map_err(|err| self.reject(err))?;
        self.query_interpolant(&interpolant, request)
    }

    /// Loads a trajectory log, derives its speed series and interpolates it.
    pub fn query_file<P: AsRef<Path>>(
        &self,
        path: P,
        request: impl Into<TimeRequest>,
    ) -> TrajectoryResult<VelocityReport> {
        let profile =
            TrajectoryProfile::load(path, self.policy).map_err(|err| self.reject(err))?;
        self.query_series(&profile.speed, request)
    }

    pub fn query_interpolant(
        &self,
        interpolant: &LinearInterpolant,
        request: impl Into<TimeRequest>,
    ) -> TrajectoryResult<VelocityReport> {
        let request = request.into();
        let velocity = interpolant
            .evaluate(request.seconds())
            .map_err(|err| self.reject(err))?;
        let report = VelocityReport::new(request, velocity);

        for sink in &self.sinks {
            sink.emit(&report).map_err(|err| self.reject(err))?;
        }
        self.metrics.record_answered();
        self.logger.detail(&format!("answered query at {request}: {velocity}"));
        Ok(report)
    }

    fn reject(&self, err: TrajectoryError) -> TrajectoryError {
        let kind = self.metrics.record_rejection(&err);
        self.logger.record(&format!("query rejected ({kind:?}): {err}"));
        err
    }
}
