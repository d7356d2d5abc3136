//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{FaultReport, NewFaultReport};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait FaultReportRepository: Send + Sync {
    /// Insert a new fault report, returning the persisted record with
    /// system-assigned `id`, `created_at`, and `updated_at`
    async fn create(&self, report: &NewFaultReport) -> RepoResult<FaultReport>;

    /// List all fault reports, most recently created first
    async fn find_all_newest_first(&self) -> RepoResult<Vec<FaultReport>>;
}
