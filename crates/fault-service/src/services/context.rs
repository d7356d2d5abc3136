//! Service context - dependency container for services
//!
//! Holds the database pool and the repository needed by services.

use std::sync::Arc;

use fault_core::traits::FaultReportRepository;
use fault_db::PgPool;

/// Service context containing all dependencies
///
/// Created once at startup and shared across all request handlers.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    report_repo: Arc<dyn FaultReportRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(pool: PgPool, report_repo: Arc<dyn FaultReportRepository>) -> Self {
        Self { pool, report_repo }
    }

    /// Get the database pool (used by readiness probes)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the fault report repository
    pub fn report_repo(&self) -> &Arc<dyn FaultReportRepository> {
        &self.report_repo
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("report_repo", &"FaultReportRepository")
            .finish()
    }
}
