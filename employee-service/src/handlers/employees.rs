//! Employee CRUD handlers.
//!
//! Each handler performs one store call and one response translation.

use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{EmployeeRequest, EmployeeResponse, MessageResponse},
    handlers::extract::ApiJson,
    models::EmployeeId,
    services::record_operation,
    AppState,
};

pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

fn parse_id(raw: &str) -> Result<EmployeeId, AppError> {
    raw.parse::<EmployeeId>().map_err(|e| {
        tracing::debug!(employee_id = %raw, "Rejecting malformed employee id");
        AppError::BadRequest(e.into())
    })
}

/// Record the outcome of `operation` and pass the result through.
fn observe<T>(operation: &'static str, result: Result<T, AppError>) -> Result<T, AppError> {
    let outcome = match &result {
        Ok(_) => "ok",
        Err(AppError::NotFound(_)) => "not_found",
        Err(_) => "error",
    };
    record_operation(operation, outcome);
    result
}

/// List every employee.
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = observe("list", state.store.list().await)?;

    tracing::info!(count = employees.len(), "Listed employees");

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Create an employee and return the stored record.
pub async fn create_employee(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = observe("create", state.store.insert(payload.into()).await)?;

    tracing::info!(employee_id = %employee.id, "Created employee");

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Overwrite an employee's name, salary and age.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(payload): ApiJson<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let id = parse_id(&raw_id)?;

    let updated = state
        .store
        .update(&id, payload.into())
        .await
        .and_then(|employee| {
            employee.ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Employee not found")))
        });
    let employee = observe("update", updated)?;

    tracing::info!(employee_id = %employee.id, "Updated employee");

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Delete an employee. Succeeds whether or not the id matched anything.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id)?;

    let deleted = observe("delete", state.store.delete(&id).await)?;

    tracing::info!(employee_id = %id, deleted, "Deleted employee");

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
