//! Request types for the HR engine API.
//!
//! This module defines the JSON request bodies for the record-mutating
//! endpoints and their conversions into store input types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceStatus;
use crate::store::{NewAttendance, NewEmployee, NewLeaveRequest, NewReview};

/// Request body for `POST /employees` and `PUT /employees/{id}`.
///
/// Updates are full replacements of the mutable fields, so both
/// endpoints share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's full name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The date the employee was hired, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The employee's gross monthly salary, if set.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

/// Request body for `POST /reviews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Identifier of the employee being reviewed.
    pub employee_id: String,
    /// The evaluation date; the server uses today when omitted.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
    /// Overall score given by the manager.
    pub score: i32,
    /// Free-form manager comment.
    pub manager_comment: String,
}

/// Request body for `POST /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Identifier of the employee the record belongs to.
    pub employee_id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

/// Request body for `PUT /attendance/{id}`.
///
/// Only the status can change; the record's date is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusRequest {
    /// The new status.
    pub status: AttendanceStatus,
}

/// Request body for `POST /leave-requests`.
///
/// There is no status field: every new request starts pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestBody {
    /// Identifier of the requesting employee.
    pub employee_id: String,
    /// First day of the requested leave.
    pub start_date: NaiveDate,
    /// Last day of the requested leave.
    pub end_date: NaiveDate,
    /// Free-form reason supplied by the employee.
    pub reason: String,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            position: req.position,
            department: req.department,
            hire_date: req.hire_date,
            monthly_salary: req.monthly_salary,
        }
    }
}

impl From<ReviewRequest> for NewReview {
    fn from(req: ReviewRequest) -> Self {
        NewReview {
            employee_id: req.employee_id,
            evaluation_date: req.evaluation_date,
            score: req.score,
            manager_comment: req.manager_comment,
        }
    }
}

impl From<AttendanceRequest> for NewAttendance {
    fn from(req: AttendanceRequest) -> Self {
        NewAttendance {
            employee_id: req.employee_id,
            date: req.date,
            status: req.status,
        }
    }
}

impl From<LeaveRequestBody> for NewLeaveRequest {
    fn from(req: LeaveRequestBody) -> Self {
        NewLeaveRequest {
            employee_id: req.employee_id,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
        }
    }
}
