//! HTTP request handlers for the HR engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_daily_report, compute_payroll};
use crate::error::HrError;

use super::request::{
    AttendanceRequest, AttendanceStatusRequest, EmployeeRequest, LeaveRequestBody, ReviewRequest,
};
use super::response::{ApiError, ApiErrorResponse, DailyReport, EmployeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/employees/:id/payroll", get(payroll_handler))
        .route("/reviews", post(create_review_handler))
        .route("/attendance", post(create_attendance_handler))
        .route("/attendance/:id", put(update_attendance_handler))
        .route("/leave-requests", post(create_leave_request_handler))
        .route("/leave-requests/:id/approve", post(approve_leave_handler))
        .route("/leave-requests/:id/reject", post(reject_leave_handler))
        .route("/reports/daily", get(daily_report_handler))
        .with_state(state)
}

/// Handler for GET /employees.
///
/// Lists all employees with their computed years of service.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    let store = state.store().read().await;
    let today = Utc::now().date_naive();
    let employees: Vec<EmployeeResponse> = store
        .employees()
        .iter()
        .map(|employee| EmployeeResponse::new(employee, today))
        .collect();

    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Employee listing completed"
    );
    json_response(StatusCode::OK, employees)
}

/// Handler for POST /employees.
///
/// Creates an employee and returns the stored record with its
/// assigned identifier.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee creation");

    let request = match unwrap_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.add_employee(request.into()) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee created"
            );
            let response = EmployeeResponse::new(&employee, Utc::now().date_naive());
            json_response(StatusCode::CREATED, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee creation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for PUT /employees/:id.
///
/// Replaces the employee's fields with the request body.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        "Processing employee update"
    );

    let request = match unwrap_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.update_employee(&id, request.into()) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee updated"
            );
            let response = EmployeeResponse::new(&employee, Utc::now().date_naive());
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee update failed"
            );
            error_response(err)
        }
    }
}

/// Handler for DELETE /employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        "Processing employee deletion"
    );

    let mut store = state.store().write().await;
    match store.delete_employee(&id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                "Employee deleted"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee deletion failed"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /employees/:id/payroll.
///
/// Returns the monthly payroll estimate for one employee.
async fn payroll_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        "Processing payroll estimate"
    );

    let store = state.store().read().await;
    let employee = match store.employee(&id) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll estimate failed"
            );
            return error_response(err);
        }
    };

    let result = compute_payroll(employee, store.attendance());
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        net_salary = %result.net_salary,
        "Payroll estimate completed"
    );
    json_response(StatusCode::OK, result)
}

/// Handler for POST /reviews.
async fn create_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing review creation");

    let request = match unwrap_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.add_review(request.into()) {
        Ok(review) => {
            info!(
                correlation_id = %correlation_id,
                review_id = %review.id,
                employee_id = %review.employee_id,
                "Review created"
            );
            json_response(StatusCode::CREATED, review)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Review creation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /attendance.
async fn create_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance creation");

    let request = match unwrap_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.add_attendance(request.into()) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                attendance_id = %record.id,
                employee_id = %record.employee_id,
                "Attendance record created"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance creation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for PUT /attendance/:id.
///
/// Corrects the status of an existing attendance record.
async fn update_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AttendanceStatusRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        attendance_id = %id,
        "Processing attendance update"
    );

    let request = match unwrap_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.update_attendance_status(&id, request.status) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                attendance_id = %record.id,
                "Attendance record updated"
            );
            json_response(StatusCode::OK, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance update failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /leave-requests.
///
/// Creates a leave request; the stored request always starts pending.
async fn create_leave_request_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave request creation");

    let request = match unwrap_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.add_leave_request(request.into()) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                leave_id = %leave.id,
                employee_id = %leave.employee_id,
                "Leave request created"
            );
            json_response(StatusCode::CREATED, leave)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave request creation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /leave-requests/:id/approve.
async fn approve_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        leave_id = %id,
        "Processing leave approval"
    );

    let mut store = state.store().write().await;
    match store.approve_leave(&id) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                leave_id = %leave.id,
                "Leave request approved"
            );
            json_response(StatusCode::OK, leave)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave approval failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /leave-requests/:id/reject.
async fn reject_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        leave_id = %id,
        "Processing leave rejection"
    );

    let mut store = state.store().write().await;
    match store.reject_leave(&id) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                leave_id = %leave.id,
                "Leave request rejected"
            );
            json_response(StatusCode::OK, leave)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave rejection failed"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /reports/daily.
///
/// Builds the administrative snapshot across all employees.
async fn daily_report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Generating daily report");

    let start_time = Instant::now();
    let store = state.store().read().await;
    let entries = build_daily_report(
        store.employees(),
        store.reviews(),
        store.attendance(),
        store.leave_requests(),
    );

    let now = Utc::now();
    let report = DailyReport {
        report_id: Uuid::new_v4(),
        generated_at: now,
        report_date: now.date_naive(),
        entries,
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        entries = report.entries.len(),
        duration_us = duration.as_micros(),
        "Daily report generated"
    );
    json_response(StatusCode::OK, report)
}

/// Serializes a body as a JSON response with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a domain error into its HTTP response.
fn error_response(error: HrError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Extracts the JSON body of a request, mapping rejections to a 400
/// response in the shared error format.
fn unwrap_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
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
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{PayrollResult, Seniority};
    use crate::store::load_dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let store = load_dataset("./data/sample").expect("Failed to load dataset");
        AppState::new(store)
    }

    #[tokio::test]
    async fn test_api_001_employee_listing_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/employees")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let employees: Vec<EmployeeResponse> = serde_json::from_slice(&body).unwrap();

        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].id, "emp_001");
        assert_eq!(employees[0].name, "Alice Moreau");
        // No hire date on the third sample employee
        assert_eq!(employees[2].years_of_service, Seniority::NotApplicable);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_name_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        // JSON with missing name field
        let body = r#"{
            "position": "Accountant",
            "department": "Finance"
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_payroll_for_sample_employee() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/employees/emp_001/payroll")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayrollResult = serde_json::from_slice(&body).unwrap();

        // emp_001: 3000.00 salary, one unjustified absence in the sample set
        assert_eq!(result.unjustified_absence_days, 1);
        assert_eq!(result.deduction, Decimal::from_str("150.00").unwrap());
        assert_eq!(result.net_salary, Decimal::from_str("2850.00").unwrap());
    }

    #[tokio::test]
    async fn test_api_005_payroll_for_unknown_employee_returns_404() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/employees/emp_missing/payroll")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_006_daily_report_covers_all_employees() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/daily")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: DailyReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.report_date, report.generated_at.date_naive());
        assert_eq!(report.entries[0].employee_id, "emp_001");
    }
}
