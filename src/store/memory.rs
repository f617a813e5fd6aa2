//! In-memory store for the four entity collections.
//!
//! This module provides the [`InMemoryStore`] type that owns the
//! employee, review, attendance, and leave request collections and
//! implements their create/update/delete operations. Collections keep
//! insertion order; the daily report's current-status rule depends on
//! it.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{HrError, HrResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, LeaveStatus, Review,
};

/// The fields of an employee record, minus the store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    /// The employee's full name. Must not be blank.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The date the employee was hired, if known.
    pub hire_date: Option<NaiveDate>,
    /// The employee's gross monthly salary, if set. Must be non-negative.
    pub monthly_salary: Option<Decimal>,
}

/// The fields of a review, minus the store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    /// Identifier of the employee being reviewed.
    pub employee_id: String,
    /// The evaluation date; defaults to today when absent.
    pub evaluation_date: Option<NaiveDate>,
    /// Overall score given by the manager.
    pub score: i32,
    /// Free-form manager comment.
    pub manager_comment: String,
}

/// The fields of an attendance record, minus the store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    /// Identifier of the employee the record belongs to.
    pub employee_id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

/// The fields of a leave request, minus the identifier and status.
///
/// There is no status field: every new request starts pending.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaveRequest {
    /// Identifier of the requesting employee.
    pub employee_id: String,
    /// First day of the requested leave.
    pub start_date: NaiveDate,
    /// Last day of the requested leave.
    pub end_date: NaiveDate,
    /// Free-form reason supplied by the employee.
    pub reason: String,
}

/// Owns the four entity collections and their mutation rules.
///
/// All collections are plain vectors in insertion order. Relationships
/// are by identifier equality and resolved by linear scan; nothing is
/// indexed. Deleting an employee leaves that employee's attendance,
/// review, and leave records in place.
///
/// # Example
///
/// ```
/// use hr_engine::store::{InMemoryStore, NewEmployee};
///
/// let mut store = InMemoryStore::new();
/// let employee = store
///     .add_employee(NewEmployee {
///         name: "Alice Moreau".to_string(),
///         position: "Accountant".to_string(),
///         department: "Finance".to_string(),
///         hire_date: None,
///         monthly_salary: None,
///     })
///     .unwrap();
/// assert_eq!(store.employee(&employee.id).unwrap().name, "Alice Moreau");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    reviews: Vec<Review>,
    attendance: Vec<AttendanceRecord>,
    leave_requests: Vec<LeaveRequest>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already-materialized collections.
    ///
    /// Used by the dataset loader and by tests. The collections are
    /// taken as-is, without field validation, and keep their order.
    pub fn with_collections(
        employees: Vec<Employee>,
        reviews: Vec<Review>,
        attendance: Vec<AttendanceRecord>,
        leave_requests: Vec<LeaveRequest>,
    ) -> Self {
        Self {
            employees,
            reviews,
            attendance,
            leave_requests,
        }
    }

    /// Returns the employee collection in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the review collection in insertion order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Returns the attendance collection in insertion order.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Returns the leave request collection in insertion order.
    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    /// Looks up an employee by identifier.
    pub fn employee(&self, id: &str) -> HrResult<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| HrError::EmployeeNotFound { id: id.to_string() })
    }

    /// Adds an employee, assigning a fresh identifier.
    ///
    /// Fails with `InvalidEmployee` when the name is blank or the
    /// monthly salary is negative.
    pub fn add_employee(&mut self, fields: NewEmployee) -> HrResult<Employee> {
        validate_employee_fields(&fields)?;

        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            position: fields.position,
            department: fields.department,
            hire_date: fields.hire_date,
            monthly_salary: fields.monthly_salary,
        };
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Replaces an employee's mutable fields, keeping the identifier.
    ///
    /// Fails with `EmployeeNotFound` when the identifier is unknown and
    /// with `InvalidEmployee` on the same validations as
    /// [`add_employee`](Self::add_employee).
    pub fn update_employee(&mut self, id: &str, fields: NewEmployee) -> HrResult<Employee> {
        validate_employee_fields(&fields)?;

        let employee = self
            .employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| HrError::EmployeeNotFound { id: id.to_string() })?;

        employee.name = fields.name;
        employee.position = fields.position;
        employee.department = fields.department;
        employee.hire_date = fields.hire_date;
        employee.monthly_salary = fields.monthly_salary;
        Ok(employee.clone())
    }

    /// Removes an employee record.
    ///
    /// Related attendance, review, and leave records are left in place;
    /// they simply stop appearing on the daily report once the employee
    /// is gone.
    pub fn delete_employee(&mut self, id: &str) -> HrResult<()> {
        let index = self
            .employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| HrError::EmployeeNotFound { id: id.to_string() })?;

        self.employees.remove(index);
        Ok(())
    }

    /// Adds a review for an existing employee.
    ///
    /// The evaluation date defaults to today (UTC) when not supplied.
    pub fn add_review(&mut self, fields: NewReview) -> HrResult<Review> {
        self.employee(&fields.employee_id)?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            employee_id: fields.employee_id,
            evaluation_date: fields
                .evaluation_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            score: fields.score,
            manager_comment: fields.manager_comment,
        };
        self.reviews.push(review.clone());
        Ok(review)
    }

    /// Adds an attendance record for an existing employee.
    ///
    /// Duplicate dates for the same employee are accepted; each record
    /// counts separately in payroll.
    pub fn add_attendance(&mut self, fields: NewAttendance) -> HrResult<AttendanceRecord> {
        self.employee(&fields.employee_id)?;

        let record = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: fields.employee_id,
            date: fields.date,
            status: fields.status,
        };
        self.attendance.push(record.clone());
        Ok(record)
    }

    /// Changes the status of an existing attendance record.
    ///
    /// The date is immutable after creation; only the status changes.
    pub fn update_attendance_status(
        &mut self,
        id: &str,
        status: AttendanceStatus,
    ) -> HrResult<AttendanceRecord> {
        let record = self
            .attendance
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| HrError::AttendanceRecordNotFound { id: id.to_string() })?;

        record.status = status;
        Ok(record.clone())
    }

    /// Adds a leave request for an existing employee.
    ///
    /// The request always starts pending.
    pub fn add_leave_request(&mut self, fields: NewLeaveRequest) -> HrResult<LeaveRequest> {
        self.employee(&fields.employee_id)?;

        let request = LeaveRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: fields.employee_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            reason: fields.reason,
            status: LeaveStatus::Pending,
        };
        self.leave_requests.push(request.clone());
        Ok(request)
    }

    /// Approves a pending leave request.
    pub fn approve_leave(&mut self, id: &str) -> HrResult<LeaveRequest> {
        let request = self.leave_request_mut(id)?;
        request.approve()?;
        Ok(request.clone())
    }

    /// Rejects a pending leave request.
    pub fn reject_leave(&mut self, id: &str) -> HrResult<LeaveRequest> {
        let request = self.leave_request_mut(id)?;
        request.reject()?;
        Ok(request.clone())
    }

    fn leave_request_mut(&mut self, id: &str) -> HrResult<&mut LeaveRequest> {
        self.leave_requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| HrError::LeaveRequestNotFound { id: id.to_string() })
    }
}

fn validate_employee_fields(fields: &NewEmployee) -> HrResult<()> {
    if fields.name.trim().is_empty() {
        return Err(HrError::InvalidEmployee {
            field: "name".to_string(),
            message: "cannot be blank".to_string(),
        });
    }
    if let Some(salary) = fields.monthly_salary {
        if salary < Decimal::ZERO {
            return Err(HrError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
    }
    Ok(())
}
