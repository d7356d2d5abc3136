//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Fixtures use unique
//! markers so tests can run against a shared database without interfering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fault report submission request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub name: String,
    pub machine_name: String,
    pub machine_fault: String,
    pub fault_time: String,
    pub fault_description: String,
}

impl CreateReportRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Reporter {suffix}"),
            machine_name: format!("machine-{}-{suffix}", std::process::id()),
            machine_fault: format!("fault-{suffix}"),
            fault_time: "2024-01-01T10:00".to_string(),
            fault_description: format!("Description for report {suffix}"),
        }
    }
}

/// Fault report as returned by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultReport {
    pub id: i64,
    pub name: String,
    pub machine_name: String,
    pub machine_fault: String,
    pub fault_time: DateTime<Utc>,
    pub fault_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Envelope returned by the create endpoint
#[derive(Debug, Deserialize)]
pub struct SubmitEnvelope {
    pub success: bool,
    pub message: String,
    pub data: FaultReport,
}

/// Envelope returned by the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub success: bool,
    pub data: Vec<FaultReport>,
}

/// Envelope returned on any failure
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}
