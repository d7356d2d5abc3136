//! API integration tests
//!
//! These tests require a running PostgreSQL instance with `schema.sql`
//! applied and the DATABASE_URL environment variable set.
//!
//! Run with: cargo test -p integration-tests --test api_tests
//!
//! Tests may run against a shared database, so assertions never assume an
//! empty table; they track counts or look for uniquely marked records.

use integration_tests::{
    assert_json, assert_status, check_test_env, CreateReportRequest, ErrorEnvelope, ListEnvelope,
    SubmitEnvelope, TestServer,
};
use reqwest::StatusCode;

async fn report_count(server: &TestServer) -> usize {
    let response = server.get("/api/adminGet").await.expect("Request failed");
    let list: ListEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    list.data.len()
}

// ============================================================================
// Health Checks
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_valid_submission_returns_created_record() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateReportRequest::unique();

    let response = server.post("/api/issue", &request).await.unwrap();
    let envelope: SubmitEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.message, "Fault report submitted successfully");
    assert!(envelope.data.id > 0);
    assert_eq!(envelope.data.name, request.name);
    assert_eq!(envelope.data.machine_name, request.machine_name);
    assert_eq!(envelope.data.machine_fault, request.machine_fault);
    assert_eq!(envelope.data.fault_description, request.fault_description);
}

#[tokio::test]
async fn test_submission_trims_text_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateReportRequest::unique();
    let expected_name = request.name.clone();
    let expected_machine = request.machine_name.clone();
    request.name = format!("  {}  ", request.name);
    request.machine_name = format!("\t{}\n", request.machine_name);

    let response = server.post("/api/issue", &request).await.unwrap();
    let envelope: SubmitEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(envelope.data.name, expected_name);
    assert_eq!(envelope.data.machine_name, expected_machine);
}

#[tokio::test]
async fn test_missing_field_rejected_without_insert() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let fields = [
        "name",
        "machineName",
        "machineFault",
        "faultTime",
        "faultDescription",
    ];

    for field in fields {
        let count_before = report_count(&server).await;

        let mut body = serde_json::to_value(CreateReportRequest::unique()).unwrap();
        body.as_object_mut().unwrap().remove(field);

        let response = server.post("/api/issue", &body).await.unwrap();
        let envelope: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST)
            .await
            .unwrap_or_else(|e| panic!("missing {field}: {e}"));

        assert!(!envelope.success);
        assert!(
            envelope.error.contains("All fields are required"),
            "unexpected error for missing {field}: {}",
            envelope.error
        );
        assert_eq!(report_count(&server).await, count_before);
    }
}

#[tokio::test]
async fn test_empty_name_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let count_before = report_count(&server).await;

    let mut request = CreateReportRequest::unique();
    request.name = String::new();

    let response = server.post("/api/issue", &request).await.unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(envelope.error.contains("All fields are required"));
    assert_eq!(report_count(&server).await, count_before);
}

#[tokio::test]
async fn test_whitespace_only_field_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let count_before = report_count(&server).await;

    let mut request = CreateReportRequest::unique();
    request.machine_fault = "   ".to_string();

    let response = server.post("/api/issue", &request).await.unwrap();
    let envelope: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert!(envelope.error.contains("All fields are required"));
    assert_eq!(report_count(&server).await, count_before);
}

#[tokio::test]
async fn test_invalid_fault_time_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = CreateReportRequest::unique();
    request.fault_time = "not a date".to_string();

    let response = server.post("/api/issue", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_admin_post_duplicates_create_semantics() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateReportRequest::unique();

    let response = server.post("/api/adminGet", &request).await.unwrap();
    let envelope: SubmitEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(envelope.data.machine_name, request.machine_name);
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_listing_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    server
        .post("/api/issue", &CreateReportRequest::unique())
        .await
        .unwrap();

    let first: ListEnvelope =
        assert_json(server.get("/api/adminGet").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    let second: ListEnvelope =
        assert_json(server.get("/api/adminGet").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    let ids_first: Vec<i64> = first.data.iter().map(|r| r.id).collect();
    let ids_second: Vec<i64> = second.data.iter().map(|r| r.id).collect();
    assert_eq!(ids_first, ids_second);
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let earlier = CreateReportRequest::unique();
    let later = CreateReportRequest::unique();
    let earlier_id = assert_json::<SubmitEnvelope>(
        server.post("/api/issue", &earlier).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap()
    .data
    .id;
    let later_id = assert_json::<SubmitEnvelope>(
        server.post("/api/issue", &later).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap()
    .data
    .id;

    let list: ListEnvelope =
        assert_json(server.get("/api/adminGet").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    let pos_earlier = list.data.iter().position(|r| r.id == earlier_id).unwrap();
    let pos_later = list.data.iter().position(|r| r.id == later_id).unwrap();
    assert!(pos_later < pos_earlier, "later report should come first");

    // The whole list is ordered by creation time, descending
    for pair in list.data.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_round_trip_preserves_values() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateReportRequest::unique();

    let submitted: SubmitEnvelope = assert_json(
        server.post("/api/issue", &request).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let list: ListEnvelope =
        assert_json(server.get("/api/adminGet").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    let fetched = list
        .data
        .iter()
        .find(|r| r.id == submitted.data.id)
        .expect("submitted report missing from listing");

    assert_eq!(fetched.name, request.name);
    assert_eq!(fetched.machine_name, request.machine_name);
    assert_eq!(fetched.machine_fault, request.machine_fault);
    assert_eq!(fetched.fault_description, request.fault_description);
    assert_eq!(fetched.created_at, submitted.data.created_at);
}

#[tokio::test]
async fn test_overheat_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Unique machine name keeps this scenario isolated in a shared database
    let machine_name = format!("CNC-1-{}", integration_tests::unique_suffix());
    let request = CreateReportRequest {
        name: "Ann".to_string(),
        machine_name: machine_name.clone(),
        machine_fault: "Overheat".to_string(),
        fault_time: "2024-01-01T10:00".to_string(),
        fault_description: "Smoke observed".to_string(),
    };

    let response = server.post("/api/issue", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let list: ListEnvelope =
        assert_json(server.get("/api/adminGet").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    let matches: Vec<_> = list
        .data
        .iter()
        .filter(|r| r.machine_name == machine_name)
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].machine_fault, "Overheat");
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn test_pages_are_served() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("fault-form"));

    let response = server.get("/admin").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Fault Reports"));
}
