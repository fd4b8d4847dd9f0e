//! Data models
//!
//! Shared between registry-server and registry-client (via API).

pub mod employee;

pub use employee::{
    Assignment, Campus, Employee, EmployeeType, EmploymentStatus, Gender, MaritalStatus, Section,
};
