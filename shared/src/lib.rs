//! Shared types for the staff registry
//!
//! Domain model, directory projection, form validation, and the unified
//! error/response types used by both registry-server and registry-client.

pub mod directory;
pub mod error;
pub mod form;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use directory::{DisplayRow, FilterSet, Selection, project};
pub use form::{EmployeeForm, EmployeePayload, FieldErrors};
pub use models::{
    Assignment, Campus, Employee, EmployeeType, EmploymentStatus, Gender, MaritalStatus, Section,
};
