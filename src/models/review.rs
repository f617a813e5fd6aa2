//! Performance review model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one manager-written performance review for an employee.
///
/// The score is intended to fall in 1-5 but the range is a form hint
/// only; the engine stores whatever integer was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for the review.
    pub id: String,
    /// Identifier of the employee being reviewed.
    pub employee_id: String,
    /// The date the evaluation was recorded.
    pub evaluation_date: NaiveDate,
    /// Overall score given by the manager.
    pub score: i32,
    /// Free-form manager comment.
    pub manager_comment: String,
}
