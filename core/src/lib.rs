//! Velocity analysis core for recorded trajectory logs.
//!
//! Samples flow strictly forward: the loader builds a fixed-schema table, the
//! geodesy module maps WGS84 positions to ECEF, the kinematics module derives
//! a backward-difference speed series and the query service interpolates it
//! at requested times, writing each answer to its report sinks.

pub mod geodesy;
pub mod ingest;
pub mod interpolation;
pub mod kinematics;
pub mod math;
pub mod pipeline;
pub mod prelude;
pub mod report;
pub mod service;
pub mod telemetry;

pub use pipeline::TrajectoryProfile;
pub use prelude::{
    FirstSamplePolicy, GeodeticSample, TimeRequest, TrajectoryError, TrajectoryResult,
};
pub use service::VelocityQueryService;
