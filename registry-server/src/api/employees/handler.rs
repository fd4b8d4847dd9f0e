//! Employee API Handlers
//!
//! Create and update accept raw JSON so that out-of-set select values come
//! back through the same error envelope as validation failures instead of a
//! bare rejection from the extractor.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use shared::error::{AppError, AppResult};
use shared::form::EmployeeForm;
use shared::models::{Employee, EmploymentStatus};

use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one employment status; all records when absent
    pub employment_status: Option<EmploymentStatus>,
}

/// List employees in insertion order
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.store.list(query.employment_status);
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::employee_not_found(&id))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Employee>> {
    let form = parse_form(body)?;
    let payload = form.validate()?;
    let employee = state.store.insert(payload);
    tracing::info!(id = %employee.id, "Employee created");
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Employee>> {
    let form = parse_form(body)?;
    let payload = form.validate()?;
    let employee = state
        .store
        .update(&id, payload)
        .ok_or_else(|| AppError::employee_not_found(&id))?;
    tracing::info!(id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

fn parse_form(body: Value) -> AppResult<EmployeeForm> {
    serde_json::from_value(body).map_err(|e| AppError::invalid_request(e.to_string()))
}
