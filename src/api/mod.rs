//! HTTP API module for the HR engine.
//!
//! This module provides the REST API endpoints for managing employee,
//! attendance, review, and leave request records and for serving
//! payroll estimates and the daily report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, AttendanceStatusRequest, EmployeeRequest, LeaveRequestBody, ReviewRequest,
};
pub use response::{ApiError, DailyReport, EmployeeResponse};
pub use state::AppState;
