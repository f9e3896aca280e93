use crate::prelude::TrajectoryError;
use serde::Serialize;
use std::sync::Mutex;

/// Why a velocity query was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectionKind {
    /// Trajectory log missing, unreadable or holding non-numeric fields.
    Input,
    Schema,
    /// Misaligned, too short or unordered columns.
    Shape,
    /// Query time outside the sampled range.
    Domain,
    Sink,
}

impl RejectionKind {
    pub fn of(err: &TrajectoryError) -> Self {
        match err {
            TrajectoryError::InputNotFound { .. } | TrajectoryError::Parse { .. } => Self::Input,
            TrajectoryError::Schema(_) => Self::Schema,
            TrajectoryError::LengthMismatch(_)
            | TrajectoryError::InsufficientSamples(_)
            | TrajectoryError::UnorderedTime(_) => Self::Shape,
            TrajectoryError::Domain { .. } => Self::Domain,
            TrajectoryError::Sink { .. } => Self::Sink,
        }
    }
}

/// Query outcomes with rejections split by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryMetrics {
    pub answered: usize,
    pub input: usize,
    pub schema: usize,
    pub shape: usize,
    pub domain: usize,
    pub sink: usize,
}

impl QueryMetrics {
    pub fn rejected(&self) -> usize {
        self.input + self.schema + self.shape + self.domain + self.sink
    }

    fn count(&mut self, kind: RejectionKind) {
        let counter = match kind {
            RejectionKind::Input => &mut self.input,
            RejectionKind::Schema => &mut self.schema,
            RejectionKind::Shape => &mut self.shape,
            RejectionKind::Domain => &mut self.domain,
            RejectionKind::Sink => &mut self.sink,
        };
        *counter += 1;
    }
}

/// Shared recorder behind a query service.
pub struct MetricsRecorder {
    inner: Mutex<QueryMetrics>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(QueryMetrics::default()),
        }
    }

    pub fn record_answered(&self) {
        self.update(|metrics| metrics.answered += 1);
    }

    /// Counts `err` under its kind and returns that kind.
    pub fn record_rejection(&self, err: &TrajectoryError) -> RejectionKind {
        let kind = RejectionKind::of(err);
        self.update(|metrics| metrics.count(kind));
        kind
    }

    pub fn snapshot(&self) -> QueryMetrics {
        self.inner.lock().map(|metrics| *metrics).unwrap_or_default()
    }

    fn update(&self, apply: impl FnOnce(&mut QueryMetrics)) {
        if let Ok(mut metrics) = self.inner.lock() {
            apply(&mut metrics);
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_are_split_by_kind() {
        let metrics = MetricsRecorder::new();
        metrics.record_answered();
        metrics.record_answered();
        let kind = metrics.record_rejection(&TrajectoryError::Domain {
            requested: 5.0,
            min: 0.0,
            max: 1.0,
        });
        assert_eq!(kind, RejectionKind::Domain);
        metrics.record_rejection(&TrajectoryError::Schema("missing time".into()));
        metrics.record_rejection(&TrajectoryError::UnorderedTime("1 before 0".into()));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.answered, 2);
        assert_eq!(snapshot.domain, 1);
        assert_eq!(snapshot.schema, 1);
        assert_eq!(snapshot.shape, 1);
        assert_eq!(snapshot.input, 0);
        assert_eq!(snapshot.rejected(), 3);
    }

    #[test]
    fn io_failures_map_to_input_and_sink() {
        let io = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            RejectionKind::of(&TrajectoryError::InputNotFound {
                path: "lla_data.csv".into(),
                source: io(),
            }),
            RejectionKind::Input
        );
        assert_eq!(
            RejectionKind::of(&TrajectoryError::Sink {
                target: "stdout.txt".into(),
                source: io(),
            }),
            RejectionKind::Sink
        );
    }
}
