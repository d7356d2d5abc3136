//! PostgreSQL implementation of FaultReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fault_core::entities::{FaultReport, NewFaultReport};
use fault_core::traits::{FaultReportRepository, RepoResult};

use crate::models::FaultReportModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FaultReportRepository
#[derive(Clone)]
pub struct PgFaultReportRepository {
    pool: PgPool,
}

impl PgFaultReportRepository {
    /// Create a new PgFaultReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaultReportRepository for PgFaultReportRepository {
    #[instrument(skip(self, report))]
    async fn create(&self, report: &NewFaultReport) -> RepoResult<FaultReport> {
        let result = sqlx::query_as::<_, FaultReportModel>(
            r#"
            INSERT INTO fault_reports (name, machine_name, machine_fault, fault_time, fault_description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, machine_name, machine_fault, fault_time, fault_description, created_at, updated_at
            "#,
        )
        .bind(&report.name)
        .bind(&report.machine_name)
        .bind(&report.machine_fault)
        .bind(report.fault_time)
        .bind(&report.fault_description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(FaultReport::from(result))
    }

    #[instrument(skip(self))]
    async fn find_all_newest_first(&self) -> RepoResult<Vec<FaultReport>> {
        // id breaks ties between rows inserted within the same timestamp
        let results = sqlx::query_as::<_, FaultReportModel>(
            r#"
            SELECT id, name, machine_name, machine_fault, fault_time, fault_description, created_at, updated_at
            FROM fault_reports
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FaultReport::from).collect())
    }
}
