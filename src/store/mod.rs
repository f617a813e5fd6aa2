//! Storage layer for the HR engine.
//!
//! This module provides the in-memory store owning the four entity
//! collections and the YAML dataset loader used to seed it.

mod dataset;
mod memory;

pub use dataset::load_dataset;
pub use memory::{InMemoryStore, NewAttendance, NewEmployee, NewLeaveRequest, NewReview};
