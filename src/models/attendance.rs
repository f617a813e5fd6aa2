//! Attendance model and related types.
//!
//! This module defines the AttendanceRecord struct and AttendanceStatus
//! enum used to track daily presence for payroll purposes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the recorded status for one employee on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent without justification (payroll-deducting).
    UnjustifiedAbsence,
    /// The employee was absent with justification (no payroll effect).
    JustifiedAbsence,
}

/// Represents one attendance entry for an employee.
///
/// One record per employee per date is the intended shape, but nothing
/// enforces uniqueness; duplicate dates are tolerated and each record
/// counts separately in payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// Identifier of the employee this record belongs to.
    pub employee_id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if this record is an unjustified absence.
    ///
    /// Only unjustified absences reduce the payroll estimate; presence
    /// and justified absences do not.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::NaiveDate;
    ///
    /// let record = AttendanceRecord {
    ///     id: "att_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    ///     status: AttendanceStatus::UnjustifiedAbsence,
    /// };
    /// assert!(record.is_unjustified_absence());
    /// ```
    pub fn is_unjustified_absence(&self) -> bool {
        self.status == AttendanceStatus::UnjustifiedAbsence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: "att_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            status,
        }
    }

    #[test]
    fn test_deserialize_attendance_record() {
        let json = r#"{
            "id": "att_001",
            "employee_id": "emp_001",
            "date": "2024-03-04",
            "status": "unjustified_absence"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "att_001");
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(record.status, AttendanceStatus::UnjustifiedAbsence);
    }

    #[test]
    fn test_serialize_attendance_round_trip() {
        let record = create_test_record(AttendanceStatus::Present);
        let json = serde_json::to_string(&record).unwrap();

        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::UnjustifiedAbsence).unwrap(),
            "\"unjustified_absence\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::JustifiedAbsence).unwrap(),
            "\"justified_absence\""
        );
    }

    #[test]
    fn test_is_unjustified_absence_true_for_unjustified() {
        let record = create_test_record(AttendanceStatus::UnjustifiedAbsence);
        assert!(record.is_unjustified_absence());
    }

    #[test]
    fn test_is_unjustified_absence_false_for_present() {
        let record = create_test_record(AttendanceStatus::Present);
        assert!(!record.is_unjustified_absence());
    }

    #[test]
    fn test_is_unjustified_absence_false_for_justified() {
        let record = create_test_record(AttendanceStatus::JustifiedAbsence);
        assert!(!record.is_unjustified_absence());
    }
}
