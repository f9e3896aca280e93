//! Human-readable velocity reports and the sinks they are written to.

pub mod format;
pub mod sink;

pub use format::{format_decimal, VelocityReport};
pub use sink::{AppendLogSink, ConsoleSink, MemorySink, ReportSink, DEFAULT_LOG_PATH};
