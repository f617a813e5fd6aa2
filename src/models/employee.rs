//! Employee model.
//!
//! This module defines the Employee struct representing a worker
//! managed by the HR engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee managed by the HR engine.
///
/// Hire date and monthly salary are optional: records created before
/// those fields were captured simply omit them, and the payroll and
/// seniority calculations return sentinel values instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's job title (e.g., "Software Engineer").
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The date the employee was hired, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The employee's gross monthly salary, if set. Non-negative.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee has a monthly salary on record.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Alice Moreau".to_string(),
    ///     position: "Accountant".to_string(),
    ///     department: "Finance".to_string(),
    ///     hire_date: None,
    ///     monthly_salary: Some(Decimal::new(300000, 2)),
    /// };
    /// assert!(employee.has_salary());
    /// ```
    pub fn has_salary(&self) -> bool {
        self.monthly_salary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Alice Moreau".to_string(),
            position: "Accountant".to_string(),
            department: "Finance".to_string(),
            hire_date: Some(NaiveDate::from_ymd_opt(2020, 8, 15).unwrap()),
            monthly_salary: Some(Decimal::new(300000, 2)),
        }
    }

    #[test]
    fn test_deserialize_full_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Alice Moreau",
            "position": "Accountant",
            "department": "Finance",
            "hire_date": "2020-08-15",
            "monthly_salary": "3000.00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Alice Moreau");
        assert_eq!(employee.position, "Accountant");
        assert_eq!(employee.department, "Finance");
        assert_eq!(
            employee.hire_date,
            Some(NaiveDate::from_ymd_opt(2020, 8, 15).unwrap())
        );
        assert_eq!(employee.monthly_salary, Some(Decimal::new(300000, 2)));
    }

    #[test]
    fn test_deserialize_employee_without_optional_fields() {
        let json = r#"{
            "id": "emp_002",
            "name": "Karim Benali",
            "position": "Technician",
            "department": "Operations"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.hire_date, None);
        assert_eq!(employee.monthly_salary, None);
        assert!(!employee.has_salary());
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_has_salary_returns_true_when_set() {
        let employee = create_test_employee();
        assert!(employee.has_salary());
    }

    #[test]
    fn test_has_salary_returns_false_when_missing() {
        let mut employee = create_test_employee();
        employee.monthly_salary = None;
        assert!(!employee.has_salary());
    }
}
