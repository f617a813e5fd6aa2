//! Core data models for the HR engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod review;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus};
pub use review::Review;
