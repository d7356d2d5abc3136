//! Entity <-> model mappers

mod fault_report;
