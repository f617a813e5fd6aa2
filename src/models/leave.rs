//! Leave request model and status transitions.
//!
//! This module defines the LeaveRequest struct and LeaveStatus enum.
//! Leave requests are the only entity with lifecycle semantics: a
//! request starts pending and moves exactly once to approved or
//! rejected, both terminal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};

/// Represents the decision state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a manager decision.
    Pending,
    /// Approved by a manager. Terminal.
    Approved,
    /// Rejected by a manager. Terminal.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Represents one leave request filed by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// Identifier of the requesting employee.
    pub employee_id: String,
    /// First day of the requested leave.
    pub start_date: NaiveDate,
    /// Last day of the requested leave.
    pub end_date: NaiveDate,
    /// Free-form reason supplied by the employee.
    pub reason: String,
    /// Current decision state.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns true if the request is still awaiting a decision.
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Approves the request.
    ///
    /// Only a pending request can be approved; approving an already
    /// decided request fails with `LeaveTransitionNotAllowed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::{LeaveRequest, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let mut request = LeaveRequest {
    ///     id: "leave_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
    ///     reason: "Family event".to_string(),
    ///     status: LeaveStatus::Pending,
    /// };
    /// request.approve().unwrap();
    /// assert_eq!(request.status, LeaveStatus::Approved);
    /// assert!(request.approve().is_err());
    /// ```
    pub fn approve(&mut self) -> HrResult<()> {
        self.transition_to(LeaveStatus::Approved)
    }

    /// Rejects the request.
    ///
    /// Only a pending request can be rejected; rejecting an already
    /// decided request fails with `LeaveTransitionNotAllowed`.
    pub fn reject(&mut self) -> HrResult<()> {
        self.transition_to(LeaveStatus::Rejected)
    }

    fn transition_to(&mut self, next: LeaveStatus) -> HrResult<()> {
        if !self.is_pending() {
            return Err(HrError::LeaveTransitionNotAllowed {
                id: self.id.clone(),
                status: self.status.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
