use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use trajcore::math::{SeriesSummary, StatsHelper};
use trajcore::report::VelocityReport;
use trajcore::{TrajectoryProfile, VelocityQueryService};

pub struct WorkflowResult {
    pub profile: TrajectoryProfile,
    pub reports: Vec<VelocityReport>,
    pub summary: SeriesSummary,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Runs the workflow against the configured append-only log and the
    /// console.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let service =
            VelocityQueryService::with_log_file(&self.config.log_path, self.config.first_sample);
        self.execute_with(&service)
    }

    /// Builds the profile once and answers every query in order. The first
    /// rejected query aborts the run.
    pub fn execute_with(&self, service: &VelocityQueryService) -> anyhow::Result<WorkflowResult> {
        let profile = TrajectoryProfile::load(&self.config.input, service.policy())
            .with_context(|| {
                format!(
                    "building velocity profile from {}",
                    self.config.input.display()
                )
            })?;
        let interpolant = profile.interpolant().context("building speed interpolant")?;

        let mut reports = Vec::with_capacity(self.config.queries.len());
        for &request in &self.config.queries {
            let report = service
                .query_interpolant(&interpolant, request)
                .with_context(|| format!("answering velocity query at {request}"))?;
            reports.push(report);
        }

        let summary = StatsHelper::summarize(profile.speed.speed());
        let metrics = service.metrics();
        info!(
            "workflow finished: {} samples, {} queries answered, {} rejected",
            profile.samples.len(),
            metrics.answered,
            metrics.rejected()
        );

        Ok(WorkflowResult {
            profile,
            reports,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::{write_trajectory, GeneratorConfig};
    use tempfile::tempdir;
    use trajcore::report::MemorySink;
    use trajcore::{FirstSamplePolicy, TimeRequest};

    fn generated_config(queries: Vec<TimeRequest>) -> (tempfile::TempDir, WorkflowConfig) {
        let dir = tempdir().unwrap();
        let input = dir.path().join("lla_data.csv");
        let generator = GeneratorConfig {
            samples: 50,
            ..Default::default()
        };
        write_trajectory(&input, &generator).unwrap();
        let cfg = WorkflowConfig::from_args(
            input,
            dir.path().join("stdout.txt"),
            FirstSamplePolicy::Zero,
            queries,
        );
        (dir, cfg)
    }

    #[test]
    fn runner_answers_queries_in_order() {
        let start = GeneratorConfig::default().start_time as i64;
        let (_dir, cfg) = generated_config(vec![
            TimeRequest::Integer(start + 10),
            TimeRequest::Float(start as f64 + 20.5),
        ]);
        let sink = MemorySink::new();
        let service = VelocityQueryService::new(FirstSamplePolicy::Zero).with_sink(sink.clone());

        let result = Runner::new(cfg).execute_with(&service).unwrap();
        assert_eq!(result.reports.len(), 2);
        assert_eq!(sink.lines().len(), 2);
        assert_eq!(result.profile.speed.len(), 50);
        // Constant ground speed of the default generator.
        assert!((result.reports[0].velocity - 250.0).abs() < 1.0);
    }

    #[test]
    fn runner_writes_append_only_log() {
        let start = GeneratorConfig::default().start_time as i64;
        let (_dir, cfg) = generated_config(vec![TimeRequest::Integer(start + 5)]);
        let log_path = cfg.log_path.clone();
        Runner::new(cfg.clone()).execute().unwrap();
        Runner::new(cfg).execute().unwrap();

        let contents = std::fs::read_to_string(log_path).unwrap();
        let expected = format!("\nVelocity(time={}seconds) = ", start + 5);
        assert_eq!(contents.matches(&expected).count(), 2);
    }

    #[test]
    fn runner_stops_on_out_of_range_query() {
        let (_dir, cfg) = generated_config(vec![TimeRequest::Integer(0)]);
        let sink = MemorySink::new();
        let service = VelocityQueryService::new(FirstSamplePolicy::Zero).with_sink(sink.clone());
        let err = Runner::new(cfg).execute_with(&service).err().unwrap();
        assert!(format!("{err:#}").contains("outside sampled range"));
        assert!(sink.lines().is_empty());
    }
}
