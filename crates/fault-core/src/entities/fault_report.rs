//! Fault report entity - represents a submitted machine fault report

use chrono::{DateTime, Utc};

/// A persisted fault report
///
/// Records are insert-only: once written they are never updated or deleted,
/// so `updated_at` always equals the value assigned at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A fault report pending insertion (no system-assigned fields yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaultReport {
    pub name: String,
    pub machine_name: String,
    pub machine_fault: String,
    pub fault_time: DateTime<Utc>,
    pub fault_description: String,
}

impl NewFaultReport {
    /// Create a new report, trimming all text fields
    pub fn new(
        name: &str,
        machine_name: &str,
        machine_fault: &str,
        fault_time: DateTime<Utc>,
        fault_description: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            machine_name: machine_name.trim().to_string(),
            machine_fault: machine_fault.trim().to_string(),
            fault_time,
            fault_description: fault_description.trim().to_string(),
        }
    }

    /// Check that every user-supplied text field is non-empty
    ///
    /// Fields are trimmed at construction, so an all-whitespace input
    /// counts as empty here.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.machine_name.is_empty()
            && !self.machine_fault.is_empty()
            && !self.fault_description.is_empty()
    }
}
