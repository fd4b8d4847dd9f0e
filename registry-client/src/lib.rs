//! Staff Registry Client
//!
//! HTTP client for the registry server API, plus the registration workflow
//! that ties form validation, submission, and user feedback together.

pub mod client;
pub mod error;
pub mod notify;
pub mod registration;

pub use client::{DirectoryClient, NetworkClient, RegistryClient};
pub use error::{ClientError, ClientResult, HttpError};
pub use notify::{Notifier, TracingNotifier};
pub use registration::{SubmitMode, SubmitOutcome, submit_registration};

#[cfg(feature = "in-process")]
pub use client::InProcessClient;

// Re-export shared types for convenience
pub use shared::form::{EmployeeForm, EmployeePayload, FieldErrors};
pub use shared::models::Employee;
