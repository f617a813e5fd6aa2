//! Dataset loading functionality.
//!
//! This module loads the four entity collections from YAML files in a
//! dataset directory and produces a populated [`InMemoryStore`]. Loading
//! happens once at startup, before the store is shared; the calculation
//! functions never touch files.

use std::fs;
use std::path::Path;

use crate::error::{HrError, HrResult};
use crate::models::{AttendanceRecord, Employee, LeaveRequest, Review};

use super::memory::InMemoryStore;

/// Loads a store from the specified dataset directory.
///
/// # Directory Structure
///
/// The dataset directory should have the following structure:
/// ```text
/// data/sample/
/// ├── employees.yaml       # Employee records
/// ├── reviews.yaml         # Performance reviews
/// ├── attendance.yaml      # Attendance records
/// └── leave_requests.yaml  # Leave requests
/// ```
///
/// Each file holds a YAML list of the corresponding records; list order
/// becomes the store's insertion order.
///
/// # Arguments
///
/// * `path` - Path to the dataset directory (e.g., "./data/sample")
///
/// # Returns
///
/// Returns a populated `InMemoryStore` on success, or an error if:
/// - Any required file is missing (`DatasetNotFound`)
/// - Any file contains invalid YAML (`DatasetParseError`)
///
/// # Example
///
/// ```no_run
/// use hr_engine::store::load_dataset;
///
/// let store = load_dataset("./data/sample")?;
/// println!("Loaded {} employees", store.employees().len());
/// # Ok::<(), hr_engine::error::HrError>(())
/// ```
pub fn load_dataset<P: AsRef<Path>>(path: P) -> HrResult<InMemoryStore> {
    let path = path.as_ref();

    let employees = load_yaml::<Vec<Employee>>(&path.join("employees.yaml"))?;
    let reviews = load_yaml::<Vec<Review>>(&path.join("reviews.yaml"))?;
    let attendance = load_yaml::<Vec<AttendanceRecord>>(&path.join("attendance.yaml"))?;
    let leave_requests = load_yaml::<Vec<LeaveRequest>>(&path.join("leave_requests.yaml"))?;

    Ok(InMemoryStore::with_collections(
        employees,
        reviews,
        attendance,
        leave_requests,
    ))
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> HrResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| HrError::DatasetNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| HrError::DatasetParseError {
        path: path_str,
        message: e.to_string(),
    })
}
