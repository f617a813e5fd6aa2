//! Payroll estimate calculation.
//!
//! This module computes the monthly payroll estimate for one employee:
//! base salary, unjustified-absence count, the resulting deduction, and
//! the net salary.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Employee};

/// Returns the deduction rate applied per unjustified-absence day.
///
/// The rate is 0.05: each unjustified absence deducts 5% of the base
/// monthly salary (not 5% of a per-day salary), so the deduction grows
/// linearly with the absence count and is deliberately not capped.
pub fn deduction_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// The payroll estimate for one employee over a set of attendance records.
///
/// All monetary fields are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee's base monthly salary.
    pub base_salary: Decimal,
    /// How many unjustified-absence records were counted.
    pub unjustified_absence_days: u32,
    /// The total deduction: `unjustified_absence_days * 0.05 * base_salary`.
    pub deduction: Decimal,
    /// The net salary: `base_salary - deduction`. Can be negative when
    /// absences exceed twenty days.
    pub net_salary: Decimal,
}

impl PayrollResult {
    /// Returns the all-zero payroll result used when the employee has no
    /// salary on record.
    pub fn zero() -> Self {
        PayrollResult {
            base_salary: Decimal::new(0, 2),
            unjustified_absence_days: 0,
            deduction: Decimal::new(0, 2),
            net_salary: Decimal::new(0, 2),
        }
    }
}

/// Computes the payroll estimate for one employee.
///
/// Counts the records in `attendance_records` that belong to the employee
/// and carry the unjustified-absence status, deducts 5% of the base
/// monthly salary per counted day, and returns the rounded figures.
/// Records belonging to other employees are ignored; justified absences
/// and presence never deduct. Duplicate dates are counted, not deduped.
///
/// If the employee has no monthly salary on record the result is all
/// zeroes, including the absence count, and the attendance records are
/// not consulted.
///
/// This is a pure function: no side effects, and identical inputs always
/// produce identical output.
///
/// # Arguments
///
/// * `employee` - The employee to compute the estimate for
/// * `attendance_records` - Attendance records to count absences from;
///   may contain records for any employee
///
/// # Returns
///
/// A [`PayrollResult`] with all monetary fields rounded to 2 decimal
/// places.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::compute_payroll;
/// use hr_engine::models::{AttendanceRecord, AttendanceStatus, Employee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Alice Moreau".to_string(),
///     position: "Accountant".to_string(),
///     department: "Finance".to_string(),
///     hire_date: None,
///     monthly_salary: Some(Decimal::from_str("3000").unwrap()),
/// };
/// let attendance = vec![AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     status: AttendanceStatus::UnjustifiedAbsence,
/// }];
///
/// let result = compute_payroll(&employee, &attendance);
/// assert_eq!(result.unjustified_absence_days, 1);
/// assert_eq!(result.deduction, Decimal::from_str("150.00").unwrap());
/// assert_eq!(result.net_salary, Decimal::from_str("2850.00").unwrap());
/// ```
pub fn compute_payroll(
    employee: &Employee,
    attendance_records: &[AttendanceRecord],
) -> PayrollResult {
    let Some(salary) = employee.monthly_salary else {
        return PayrollResult::zero();
    };

    let base_salary = round_money(salary);

    let unjustified_absence_days = attendance_records
        .iter()
        .filter(|record| record.employee_id == employee.id && record.is_unjustified_absence())
        .count() as u32;

    let deduction = round_money(
        Decimal::from(unjustified_absence_days) * deduction_rate() * base_salary,
    );

    PayrollResult {
        base_salary,
        unjustified_absence_days,
        deduction,
        net_salary: base_salary - deduction,
    }
}

/// Rounds a monetary amount to 2 decimal places, midpoints away from zero.
///
/// The scale is padded so whole amounts still display as e.g. "3000.00".
fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
