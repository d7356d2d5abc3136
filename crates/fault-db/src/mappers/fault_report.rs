//! FaultReport entity <-> model mapper

use fault_core::entities::FaultReport;

use crate::models::FaultReportModel;

/// Convert FaultReportModel to FaultReport entity
impl From<FaultReportModel> for FaultReport {
    fn from(model: FaultReportModel) -> Self {
        FaultReport {
            id: model.id,
            name: model.name,
            machine_name: model.machine_name,
            machine_fault: model.machine_fault,
            fault_time: model.fault_time,
            fault_description: model.fault_description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
