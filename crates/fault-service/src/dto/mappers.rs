//! FaultReport entity -> response DTO mapper

use fault_core::entities::FaultReport;

use super::responses::FaultReportResponse;

impl From<FaultReport> for FaultReportResponse {
    fn from(report: FaultReport) -> Self {
        Self {
            id: report.id,
            name: report.name,
            machine_name: report.machine_name,
            machine_fault: report.machine_fault,
            fault_time: report.fault_time,
            fault_description: report.fault_description,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}
