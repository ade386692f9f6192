//! HTTP request handlers for the timecard engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze, AnalysisMode};
use crate::models::ShiftRecord;
use crate::timecard::{parse_csv, TimecardImport};

use super::request::{AnalyzeRequest, TimecardQuery};
use super::response::{AnalysisResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/analyze/timecard", post(timecard_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Accepts a list of shifts as JSON and returns the detected anomalies.
async fn analyze_handler(payload: Result<Json<AnalyzeRequest>, JsonRejection>) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let shifts: Vec<ShiftRecord> = request.shifts.into_iter().map(Into::into).collect();
    let import = TimecardImport {
        records: shifts,
        skipped_rows: 0,
    };
    run_analysis(correlation_id, import, request.mode)
}

/// Handler for POST /analyze/timecard endpoint.
///
/// Accepts a CSV timecard export as the request body, reads it with the
/// server's layout and returns the detected anomalies.
async fn timecard_handler(
    State(state): State<AppState>,
    query: Result<Query<TimecardQuery>, QueryRejection>,
    body: String,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing timecard request"
    );

    let mode = match query {
        Ok(Query(query)) => query.mode,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    match parse_csv(body.as_bytes(), state.layout()) {
        Ok(import) => run_analysis(correlation_id, import, mode),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timecard rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Analyses the imported shifts and builds the success response.
fn run_analysis(correlation_id: Uuid, import: TimecardImport, mode: AnalysisMode) -> Response {
    let start_time = Instant::now();
    let report = analyze(&import.records, mode);

    info!(
        correlation_id = %correlation_id,
        shifts_count = import.records.len(),
        findings = report.findings.len(),
        failures = report.failures.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed successfully"
    );

    let response = AnalysisResponse {
        correlation_id,
        shifts_analyzed: import.records.len(),
        skipped_rows: import.skipped_rows,
        report,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
