use crate::prelude::{TrajectoryError, TrajectoryResult};
use crate::report::format::VelocityReport;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Relative log file used when no other target is configured.
pub const DEFAULT_LOG_PATH: &str = "stdout.txt";

/// Destination for rendered velocity reports.
pub trait ReportSink {
    fn emit(&self, report: &VelocityReport) -> TrajectoryResult<()>;
}

/// Append-only text log. The file is opened, appended to and closed for
/// every report; no handle is held between queries.
#[derive(Debug, Clone)]
pub struct AppendLogSink {
    path: PathBuf,
}

impl AppendLogSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for AppendLogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl ReportSink for AppendLogSink {
    fn emit(&self, report: &VelocityReport) -> TrajectoryResult<()> {
        let sink_error = |source| TrajectoryError::Sink {
            target: self.path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(sink_error)?;
        file.write_all(report.to_string().as_bytes())
            .map_err(sink_error)
    }
}

/// Prints reports to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&self, report: &VelocityReport) -> TrajectoryResult<()> {
        println!("{report}");
        Ok(())
    }
}

/// Keeps rendered reports in memory. Clones share the same buffer, so a
/// handle can be kept after the sink is handed to a service.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        if let Ok(lines) = self.lines.lock() {
            lines.clone()
        } else {
            Vec::new()
        }
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: &VelocityReport) -> TrajectoryResult<()> {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(report.to_string());
        }
        Ok(())
    }
}
