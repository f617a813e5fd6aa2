//! Daily report aggregation.
//!
//! This module assembles one summary entry per employee, combining the
//! employee's current attendance status, leave history, reviews, and
//! payroll estimate into a single projection over the four collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::payroll::{PayrollResult, compute_payroll};
use crate::models::{AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, LeaveStatus, Review};

/// The attendance status shown for an employee on the daily report.
///
/// Mirrors [`AttendanceStatus`] with one extra marker for employees that
/// have no attendance record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentStatus {
    /// The employee's latest record marks them present.
    Present,
    /// The employee's latest record is an unjustified absence.
    UnjustifiedAbsence,
    /// The employee's latest record is a justified absence.
    JustifiedAbsence,
    /// The employee has no attendance record.
    Unregistered,
}

impl From<AttendanceStatus> for CurrentStatus {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => CurrentStatus::Present,
            AttendanceStatus::UnjustifiedAbsence => CurrentStatus::UnjustifiedAbsence,
            AttendanceStatus::JustifiedAbsence => CurrentStatus::JustifiedAbsence,
        }
    }
}

/// One leave request as shown on the daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// First day of the requested leave.
    pub start_date: NaiveDate,
    /// Last day of the requested leave.
    pub end_date: NaiveDate,
    /// The request's decision state at report time.
    pub status: LeaveStatus,
}

impl From<&LeaveRequest> for LeaveSummary {
    fn from(request: &LeaveRequest) -> Self {
        LeaveSummary {
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
        }
    }
}

/// One review as shown on the daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// The date the evaluation was recorded.
    pub evaluation_date: NaiveDate,
    /// Overall score given by the manager.
    pub score: i32,
    /// Free-form manager comment.
    pub manager_comment: String,
}

impl From<&Review> for ReviewSummary {
    fn from(review: &Review) -> Self {
        ReviewSummary {
            evaluation_date: review.evaluation_date,
            score: review.score,
            manager_comment: review.manager_comment.clone(),
        }
    }
}

/// One employee's row on the daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReportEntry {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's latest attendance status, or unregistered.
    pub current_status: CurrentStatus,
    /// All of the employee's leave requests, unfiltered by status.
    pub leave_requests: Vec<LeaveSummary>,
    /// All of the employee's reviews, unfiltered.
    pub reviews: Vec<ReviewSummary>,
    /// The payroll estimate over the employee's attendance records.
    pub payroll: PayrollResult,
}

/// Builds the daily report: one entry per employee, in input order.
///
/// Each employee's related records are selected from the global
/// collections by identifier equality and composed into an
/// [`EmployeeReportEntry`]; employees with no related records still get
/// an entry, with empty lists and the unregistered status. The input
/// collections are not mutated or resorted.
///
/// The current status is taken from the last matching attendance record
/// in collection order, which is insertion order in the store; it is not
/// the chronologically latest record when records arrive out of date
/// order.
///
/// # Arguments
///
/// * `employees` - The employees to report on, in display order
/// * `reviews` - The global review collection
/// * `attendance` - The global attendance collection
/// * `leave_requests` - The global leave request collection
///
/// # Returns
///
/// One [`EmployeeReportEntry`] per input employee, in the same order.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{CurrentStatus, build_daily_report};
/// use hr_engine::models::Employee;
///
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     name: "Alice Moreau".to_string(),
///     position: "Accountant".to_string(),
///     department: "Finance".to_string(),
///     hire_date: None,
///     monthly_salary: None,
/// }];
///
/// let report = build_daily_report(&employees, &[], &[], &[]);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].current_status, CurrentStatus::Unregistered);
/// assert!(report[0].leave_requests.is_empty());
/// assert!(report[0].reviews.is_empty());
/// ```
pub fn build_daily_report(
    employees: &[Employee],
    reviews: &[Review],
    attendance: &[AttendanceRecord],
    leave_requests: &[LeaveRequest],
) -> Vec<EmployeeReportEntry> {
    employees
        .iter()
        .map(|employee| {
            // Last matching record by collection order, not by date.
            let current_status = attendance
                .iter()
                .rfind(|record| record.employee_id == employee.id)
                .map(|record| CurrentStatus::from(record.status))
                .unwrap_or(CurrentStatus::Unregistered);

            let employee_leave: Vec<LeaveSummary> = leave_requests
                .iter()
                .filter(|request| request.employee_id == employee.id)
                .map(LeaveSummary::from)
                .collect();

            let employee_reviews: Vec<ReviewSummary> = reviews
                .iter()
                .filter(|review| review.employee_id == employee.id)
                .map(ReviewSummary::from)
                .collect();

            EmployeeReportEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                position: employee.position.clone(),
                department: employee.department.clone(),
                current_status,
                leave_requests: employee_leave,
                reviews: employee_reviews,
                payroll: compute_payroll(employee, attendance),
            }
        })
        .collect()
}
