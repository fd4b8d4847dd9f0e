//! Registration workflow
//!
//! Validates form values locally, submits the normalized values to the
//! server, and reports the outcome through a [`Notifier`]. Field-level
//! validation failures are returned to the caller for inline display and
//! trigger no notification.

use crate::client::DirectoryClient;
use crate::error::ClientResult;
use crate::notify::Notifier;

use shared::form::{EmployeeForm, FieldErrors};
use shared::models::Employee;

/// Whether a submission registers a new employee or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit { id: String },
}

/// Result of a submission attempt that reached a decision
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the record
    Saved(Employee),
    /// Local validation failed; render these errors on the form
    Invalid(FieldErrors),
}

impl SubmitMode {
    fn success_message(&self) -> &'static str {
        match self {
            Self::Create => "Employee registered successfully",
            Self::Edit { .. } => "Employee information updated successfully",
        }
    }

    fn error_headline(&self) -> &'static str {
        match self {
            Self::Create => "Employee registration failed",
            Self::Edit { .. } => "Updating employee information failed",
        }
    }
}

/// Submit a registration or edit form.
///
/// Transport and server errors are notified and propagated; validation
/// failures come back as [`SubmitOutcome::Invalid`] without touching the
/// server.
pub async fn submit_registration(
    client: &dyn DirectoryClient,
    notifier: &dyn Notifier,
    mode: SubmitMode,
    form: &EmployeeForm,
) -> ClientResult<SubmitOutcome> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return Ok(SubmitOutcome::Invalid(errors)),
    };

    // Submit the normalized values, not the raw form input
    let normalized = payload.to_form();
    let result = match &mode {
        SubmitMode::Create => client.create(&normalized).await,
        SubmitMode::Edit { id } => client.update(id, &normalized).await,
    };

    match result {
        Ok(employee) => {
            notifier.success(mode.success_message());
            Ok(SubmitOutcome::Saved(employee))
        }
        Err(err) => {
            notifier.error(mode.error_headline(), &err.to_string());
            Err(err)
        }
    }
}
