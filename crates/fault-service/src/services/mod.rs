//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod report;

// Re-export for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use report::ReportService;
