//! HR administration engine
//!
//! This crate provides the core of a small HR back office: employee,
//! attendance, review, and leave request records, monthly payroll
//! estimates with absence deductions, seniority computation, and a
//! daily administrative report, exposed over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod store;
