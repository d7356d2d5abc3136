//! Fault report service
//!
//! Handles report submission and listing.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing::{info, instrument};
use validator::Validate;

use fault_core::entities::NewFaultReport;

use crate::dto::{CreateFaultReportRequest, FaultReportResponse, REQUIRED_FIELDS_MESSAGE};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Accepted formats for naive (zone-less) fault times, interpreted as UTC.
/// The first covers the HTML `datetime-local` input the submission form sends.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a user-supplied fault time string
///
/// Tries RFC 3339 first, then the naive formats above.
pub fn parse_fault_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    })
}

/// Fault report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new fault report
    ///
    /// Validates field presence (post-trim), parses the fault time, and
    /// inserts one record. Returns the persisted record with its assigned id.
    #[instrument(skip(self, request))]
    pub async fn submit_report(
        &self,
        request: CreateFaultReportRequest,
    ) -> ServiceResult<FaultReportResponse> {
        if request.validate().is_err() {
            return Err(ServiceError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let fault_time = parse_fault_time(&request.fault_time)
            .ok_or_else(|| ServiceError::validation("faultTime must be a valid date-time"))?;

        let report = NewFaultReport::new(
            &request.name,
            &request.machine_name,
            &request.machine_fault,
            fault_time,
            &request.fault_description,
        );

        // Re-check after trimming: a whitespace-only field passes the DTO
        // length validator but is still empty.
        if !report.is_complete() {
            return Err(ServiceError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let persisted = self.ctx.report_repo().create(&report).await?;

        info!(report_id = persisted.id, machine = %persisted.machine_name, "Fault report created");

        Ok(FaultReportResponse::from(persisted))
    }

    /// List all fault reports, newest first
    #[instrument(skip(self))]
    pub async fn list_reports(&self) -> ServiceResult<Vec<FaultReportResponse>> {
        let reports = self.ctx.report_repo().find_all_newest_first().await?;
        Ok(reports.into_iter().map(FaultReportResponse::from).collect())
    }
}
