//! Domain entities

mod fault_report;

pub use fault_report::{FaultReport, NewFaultReport};
