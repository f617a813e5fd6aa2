//! Calculation logic for the HR engine.
//!
//! This module contains the pure computation functions: the payroll
//! estimate (base salary, unjustified-absence deduction, net salary),
//! the anniversary-aware seniority calculation, and the daily report
//! aggregation that composes attendance, leave, review, and payroll
//! data into one entry per employee.

mod daily_report;
mod payroll;
mod seniority;

pub use daily_report::{
    CurrentStatus, EmployeeReportEntry, LeaveSummary, ReviewSummary, build_daily_report,
};
pub use payroll::{PayrollResult, compute_payroll, deduction_rate};
pub use seniority::{Seniority, years_of_service};
