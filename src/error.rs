//! Error types for the HR engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing HR records.

use thiserror::Error;

/// The main error type for the HR engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hr_engine::error::HrError;
///
/// let error = HrError::DatasetNotFound {
///     path: "/missing/employees.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Dataset file not found: /missing/employees.yaml");
/// ```
#[derive(Debug, Error)]
pub enum HrError {
    /// Dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Dataset file could not be parsed.
    #[error("Failed to parse dataset file '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        id: String,
    },

    /// No attendance record exists with the given identifier.
    #[error("Attendance record not found: {id}")]
    AttendanceRecordNotFound {
        /// The attendance record identifier that was not found.
        id: String,
    },

    /// No leave request exists with the given identifier.
    #[error("Leave request not found: {id}")]
    LeaveRequestNotFound {
        /// The leave request identifier that was not found.
        id: String,
    },

    /// A leave request decision was attempted on a request that is no
    /// longer pending.
    #[error("Leave request '{id}' cannot change status: already {status}")]
    LeaveTransitionNotAllowed {
        /// The ID of the leave request.
        id: String,
        /// The request's current (terminal) status.
        status: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return HrError.
pub type HrResult<T> = Result<T, HrError>;
