use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use trajcore::report::DEFAULT_LOG_PATH;
use trajcore::{FirstSamplePolicy, TimeRequest};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub input: PathBuf,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    #[serde(default)]
    pub first_sample: FirstSamplePolicy,
    #[serde(default)]
    pub queries: Vec<TimeRequest>,
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        input: PathBuf,
        log_path: PathBuf,
        first_sample: FirstSamplePolicy,
        queries: Vec<TimeRequest>,
    ) -> Self {
        Self {
            input,
            log_path,
            first_sample,
            queries,
        }
    }

    /// Command-line values win over the loaded file; `None` keeps the file's.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        log_path: Option<PathBuf>,
        first_sample: Option<FirstSamplePolicy>,
    ) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(log_path) = log_path {
            self.log_path = log_path;
        }
        if let Some(first_sample) = first_sample {
            self.first_sample = first_sample;
        }
        self
    }

    /// Queries given on the command line run after the configured ones.
    pub fn with_extra_queries(mut self, queries: impl IntoIterator<Item = TimeRequest>) -> Self {
        self.queries.extend(queries);
        self
    }
}
