//! Database models

mod fault_report;

pub use fault_report::FaultReportModel;
