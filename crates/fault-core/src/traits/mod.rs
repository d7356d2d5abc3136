//! Repository traits (ports)

mod repositories;

pub use repositories::{FaultReportRepository, RepoResult};
