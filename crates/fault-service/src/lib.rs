//! # fault-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types
pub use dto::{
    ApiData, CreateFaultReportRequest, CreatedData, FaultReportResponse, HealthChecks,
    HealthResponse, ReadinessResponse, REQUIRED_FIELDS_MESSAGE,
};
pub use services::{ReportService, ServiceContext, ServiceError, ServiceResult};
