//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Error message used whenever a required field is absent or blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Fault report submission request
///
/// Every field defaults to the empty string so an absent field fails
/// validation the same way an empty one does. `fault_time` arrives as a
/// date-time string and is parsed by the service layer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaultReportRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub machine_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub machine_fault: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub fault_time: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub fault_description: String,
}
