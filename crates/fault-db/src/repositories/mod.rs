//! Repository implementations

mod error;
mod fault_report;

pub use error::map_db_error;
pub use fault_report::PgFaultReportRepository;
