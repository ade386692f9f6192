//! Integration tests for the timecard engine HTTP API.
//!
//! This test suite covers:
//! - Consecutive days under both adjacency policies
//! - Short gaps and long shifts, including threshold boundaries
//! - Sequential versus per-employee analysis
//! - CSV timecard uploads
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use timecard_engine::api::{create_router, AppState};
use timecard_engine::config::ConfigLoader;
use timecard_engine::logging;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    logging::init_test();
    let config = ConfigLoader::load("./config/timecard.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post(router: Router, uri: &str, content_type: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_analyze(router: Router, body: Value) -> (StatusCode, Value) {
    post(router, "/analyze", "application/json", body.to_string()).await
}

fn create_shift(name: &str, start: &str, end: &str) -> Value {
    json!({
        "name": name,
        "position": "Nurse",
        "start": start,
        "end": end
    })
}

/// A 9:00 to 17:00 shift for Jane Doe on the given date.
fn day_shift(date: &str) -> Value {
    create_shift(
        "Jane Doe",
        &format!("{}T09:00:00", date),
        &format!("{}T17:00:00", date),
    )
}

fn findings_of<'a>(result: &'a Value, kind: &str) -> Vec<&'a Value> {
    result["findings"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["kind"] == kind)
        .collect()
}

fn subject_indices(result: &Value, kind: &str) -> Vec<u64> {
    findings_of(result, kind)
        .iter()
        .map(|f| f["subject_index"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Consecutive Days
// =============================================================================

#[tokio::test]
async fn test_working_week_spanning_weekend_is_one_finding() {
    // Mon 12 .. Fri 16, then Mon 19 and Tue 20
    let shifts: Vec<Value> = [
        "2026-01-12",
        "2026-01-13",
        "2026-01-14",
        "2026-01-15",
        "2026-01-16",
        "2026-01-19",
        "2026-01-20",
    ]
    .iter()
    .map(|d| day_shift(d))
    .collect();

    let (status, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["shifts_analyzed"], 7);
    assert_eq!(result["findings"].as_array().unwrap().len(), 1);

    let finding = &result["findings"][0];
    assert_eq!(finding["kind"], "consecutive_days");
    assert_eq!(finding["subject_index"], 0);
    assert_eq!(finding["policy"], "working_day");
    assert_eq!(
        finding["message"],
        "Employee Jane Doe worked for 7 consecutive days."
    );
}

#[tokio::test]
async fn test_strict_calendar_chain() {
    // Each shift starts exactly one day after the previous one ended
    let shifts = vec![
        create_shift("Jane Doe", "2026-01-12T09:00:00", "2026-01-12T17:00:00"),
        create_shift("Jane Doe", "2026-01-13T17:00:00", "2026-01-14T01:00:00"),
        create_shift("Jane Doe", "2026-01-15T01:00:00", "2026-01-15T09:00:00"),
        create_shift("Jane Doe", "2026-01-16T09:00:00", "2026-01-16T17:00:00"),
        create_shift("Jane Doe", "2026-01-17T17:00:00", "2026-01-18T01:00:00"),
        create_shift("Jane Doe", "2026-01-19T01:00:00", "2026-01-19T09:00:00"),
        create_shift("Jane Doe", "2026-01-20T09:00:00", "2026-01-20T17:00:00"),
    ];

    let (status, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    assert_eq!(status, StatusCode::OK);
    let findings = findings_of(&result, "consecutive_days");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["policy"], "strict_calendar");
}

#[tokio::test]
async fn test_six_shifts_never_consecutive() {
    let shifts: Vec<Value> = (12..=17)
        .map(|day| day_shift(&format!("2026-01-{}", day)))
        .collect();

    let (_, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    assert!(findings_of(&result, "consecutive_days").is_empty());
}

#[tokio::test]
async fn test_ten_days_reports_each_window() {
    let shifts: Vec<Value> = (12..=21)
        .map(|day| day_shift(&format!("2026-01-{}", day)))
        .collect();

    let (_, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    assert_eq!(subject_indices(&result, "consecutive_days"), vec![0, 1, 2, 3]);
}

// =============================================================================
// Shift Gaps and Long Shifts
// =============================================================================

#[tokio::test]
async fn test_gap_boundaries() {
    let shifts = vec![
        // 1h gap to the next shift
        create_shift("Jane Doe", "2026-01-12T06:00:00", "2026-01-12T08:00:00"),
        // 5h gap
        create_shift("Jane Doe", "2026-01-12T09:00:00", "2026-01-12T11:00:00"),
        // 10h gap
        create_shift("Jane Doe", "2026-01-12T16:00:00", "2026-01-12T18:00:00"),
        create_shift("Jane Doe", "2026-01-13T04:00:00", "2026-01-13T06:00:00"),
    ];

    let (status, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    assert_eq!(status, StatusCode::OK);
    let gaps = findings_of(&result, "shift_gap");
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0]["subject_index"], 1);
    assert_eq!(gaps[0]["observed_hours"], 5);
    assert_eq!(
        gaps[0]["message"],
        "Employee Jane Doe has less than 10 hours between shifts but greater than 1 hour."
    );
}

#[tokio::test]
async fn test_long_shift_boundaries() {
    let shifts = vec![
        // Exactly 14h
        create_shift("Jane Doe", "2026-01-12T06:00:00", "2026-01-12T20:00:00"),
        // 14h 1m truncates to 14h
        create_shift("Jane Doe", "2026-01-14T06:00:00", "2026-01-14T20:01:00"),
        // 15h
        create_shift("Jane Doe", "2026-01-16T06:00:00", "2026-01-16T21:00:00"),
    ];

    let (_, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    let long = findings_of(&result, "long_shift");
    assert_eq!(long.len(), 1);
    assert_eq!(long[0]["subject_index"], 2);
    assert_eq!(long[0]["observed_hours"], 15);
    assert_eq!(
        long[0]["message"],
        "Employee Jane Doe worked for more than 14 hours in a single shift."
    );
}

#[tokio::test]
async fn test_findings_in_detector_order() {
    let shifts = vec![
        create_shift("Jane Doe", "2026-01-12T05:00:00", "2026-01-12T21:00:00"),
        create_shift("Jane Doe", "2026-01-13T01:00:00", "2026-01-13T05:00:00"),
    ];

    let (_, result) = post_analyze(create_router_for_test(), json!({ "shifts": shifts })).await;

    let kinds: Vec<&str> = result["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["shift_gap", "long_shift"]);
}

#[tokio::test]
async fn test_same_request_same_findings() {
    let shifts: Vec<Value> = (12..=20)
        .map(|day| day_shift(&format!("2026-01-{}", day)))
        .collect();
    let body = json!({ "shifts": shifts });

    let (_, first) = post_analyze(create_router_for_test(), body.clone()).await;
    let (_, second) = post_analyze(create_router_for_test(), body).await;

    assert_eq!(first["findings"], second["findings"]);
    assert_ne!(first["correlation_id"], second["correlation_id"]);
}

// =============================================================================
// Analysis Modes
// =============================================================================

#[tokio::test]
async fn test_interleaved_employees_by_mode() {
    // Two employees alternating across a full week
    let mut shifts = Vec::new();
    for day in 12..=18 {
        let date = format!("2026-01-{}", day);
        shifts.push(create_shift(
            "Jane Doe",
            &format!("{}T06:00:00", date),
            &format!("{}T14:00:00", date),
        ));
        shifts.push(create_shift(
            "John Roe",
            &format!("{}T14:00:00", date),
            &format!("{}T22:00:00", date),
        ));
    }

    let (_, sequential) = post_analyze(
        create_router_for_test(),
        json!({ "shifts": shifts.clone(), "mode": "sequential" }),
    )
    .await;
    let (_, by_employee) = post_analyze(
        create_router_for_test(),
        json!({ "shifts": shifts, "mode": "by_employee" }),
    )
    .await;

    // Adjacent records share a day, so no sequential week is found
    assert!(findings_of(&sequential, "consecutive_days").is_empty());

    // Grouped per employee, both weeks are found at their first shifts
    assert_eq!(subject_indices(&by_employee, "consecutive_days"), vec![0, 1]);
    let names: Vec<&str> = findings_of(&by_employee, "consecutive_days")
        .iter()
        .map(|f| f["employee_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jane Doe", "John Roe"]);
}

// =============================================================================
// Timecard Upload
// =============================================================================

#[tokio::test]
async fn test_timecard_upload() {
    let mut csv =
        String::from("Position ID,Position Status,Time,Time Out,Timecard Hours,Pay Cycle Start,Pay Cycle End,Employee Name\n");
    for day in 12..=18 {
        csv.push_str(&format!(
            "WFS000001,Active,01/{day}/2026 09:00 AM,01/{day}/2026 05:00 PM,8:00,,,Jane Doe\n"
        ));
    }
    csv.push_str("WFS000001,Active,,,,,,Jane Doe\n");

    let (status, result) =
        post(create_router_for_test(), "/analyze/timecard", "text/csv", csv).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["shifts_analyzed"], 7);
    assert_eq!(result["skipped_rows"], 1);
    assert_eq!(subject_indices(&result, "consecutive_days"), vec![0]);
}

#[tokio::test]
async fn test_timecard_by_employee_query() {
    let csv = "header\n\
               WFS1,Active,01/12/2026 06:00 AM,01/12/2026 02:00 PM,,,,Jane Doe\n\
               WFS2,Active,01/12/2026 04:00 PM,01/12/2026 10:00 PM,,,,John Roe\n"
        .to_string();

    let (_, sequential) =
        post(create_router_for_test(), "/analyze/timecard", "text/csv", csv.clone()).await;
    let (_, by_employee) = post(
        create_router_for_test(),
        "/analyze/timecard?mode=by_employee",
        "text/csv",
        csv,
    )
    .await;

    // 2h between different employees only counts when adjacency is trusted
    assert_eq!(subject_indices(&sequential, "shift_gap"), vec![0]);
    assert!(findings_of(&by_employee, "shift_gap").is_empty());
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let (status, result) = post(
        create_router_for_test(),
        "/analyze",
        "application/json",
        "{\"shifts\": [".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_start_is_validation_error() {
    let body = json!({
        "shifts": [{ "name": "Jane Doe", "end": "2026-01-12T17:00:00" }]
    });

    let (status, result) = post_analyze(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_timestamp_is_malformed_json() {
    let body = json!({
        "shifts": [create_shift("Jane Doe", "not a time", "2026-01-12T17:00:00")]
    });

    let (status, result) = post_analyze(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .body(Body::from(json!({ "shifts": [] }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_timecard_unreadable_timestamp() {
    let csv = "header\n\
               WFS1,Active,01/12/2026 06:00 AM,soon,,,,Jane Doe\n"
        .to_string();

    let (status, result) =
        post(create_router_for_test(), "/analyze/timecard", "text/csv", csv).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RECORD");
    assert!(result["message"].as_str().unwrap().contains("row 2"));
}
