//! Fault report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the fault_reports table
#[derive(Debug, Clone, FromRow)]
pub struct FaultReportModel {
    pub id: i64,
    pub name: String,
    pub machine_name: String,
    pub machine_fault: String,
    pub fault_time: DateTime<Utc>,
    pub fault_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
