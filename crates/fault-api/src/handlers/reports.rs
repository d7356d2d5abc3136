//! Fault report handlers
//!
//! Endpoints for submitting and listing fault reports.

use axum::{extract::State, Json};
use fault_service::{
    ApiData, CreateFaultReportRequest, CreatedData, FaultReportResponse, ReportService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Submit a fault report
///
/// POST /api/issue (also mounted on POST /api/adminGet)
pub async fn create_report(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFaultReportRequest>,
) -> ApiResult<Created<Json<CreatedData<FaultReportResponse>>>> {
    let service = ReportService::new(state.service_context());
    let report = service
        .submit_report(request)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to submit fault report"))?;

    Ok(Created(Json(CreatedData::new(
        "Fault report submitted successfully",
        report,
    ))))
}

/// List all fault reports, newest first
///
/// GET /api/adminGet
pub async fn list_reports(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiData<Vec<FaultReportResponse>>>> {
    let service = ReportService::new(state.service_context());
    let reports = service
        .list_reports()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch fault reports"))?;

    Ok(Json(ApiData::new(reports)))
}
