//! Response types for the HR engine API.
//!
//! This module defines the success payloads that are not plain domain
//! models (the employee listing with computed seniority and the daily
//! report envelope), plus the error response structures and error
//! mapping for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{EmployeeReportEntry, Seniority, years_of_service};
use crate::error::HrError;
use crate::models::Employee;

/// An employee as returned by the API, with computed seniority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The date the employee was hired, if known.
    pub hire_date: Option<NaiveDate>,
    /// The employee's gross monthly salary, if set.
    pub monthly_salary: Option<Decimal>,
    /// Whole years of service as of the response date, or "N/A".
    pub years_of_service: Seniority,
}

impl EmployeeResponse {
    /// Builds the response for an employee, computing seniority against
    /// the given reference date.
    pub fn new(employee: &Employee, today: NaiveDate) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            hire_date: employee.hire_date,
            monthly_salary: employee.monthly_salary,
            years_of_service: years_of_service(employee.hire_date, today),
        }
    }
}

/// The daily report envelope returned by `GET /reports/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    /// Unique identifier for this report generation.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The calendar date the report covers.
    pub report_date: NaiveDate,
    /// One entry per employee, in store order.
    pub entries: Vec<EmployeeReportEntry>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<HrError> for ApiErrorResponse {
    fn from(error: HrError) -> Self {
        match error {
            HrError::DatasetNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Dataset error",
                    format!("Dataset file not found: {}", path),
                ),
            },
            HrError::DatasetParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Dataset parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            HrError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", id),
                    "No employee exists with the given identifier",
                ),
            },
            HrError::AttendanceRecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ATTENDANCE_RECORD_NOT_FOUND",
                    format!("Attendance record not found: {}", id),
                    "No attendance record exists with the given identifier",
                ),
            },
            HrError::LeaveRequestNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "LEAVE_REQUEST_NOT_FOUND",
                    format!("Leave request not found: {}", id),
                    "No leave request exists with the given identifier",
                ),
            },
            HrError::LeaveTransitionNotAllowed { id, status } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "LEAVE_TRANSITION_NOT_ALLOWED",
                    format!("Leave request '{}' cannot change status", id),
                    format!("The request is already {} and cannot be decided again", status),
                ),
            },
            HrError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains invalid information",
                ),
            },
        }
    }
}
