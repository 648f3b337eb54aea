//! Entity CRUD handlers: list, create, update, delete, resolved by path segment.

use crate::case::object_keys_folded;
use crate::catalog::{Operation, TableDef};
use crate::error::AppError;
use crate::response::{confirmation, row, rows};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(object_keys_folded(m)),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Resolve the table for a path segment and check the operation is allowed on it.
fn resolve_table(state: &AppState, path_segment: &str, op: Operation) -> Result<&'static TableDef, AppError> {
    let table = state
        .catalog
        .table_by_path(path_segment)
        .ok_or_else(|| AppError::NotFound(path_segment.to_string()))?;
    if !table.allows(op) {
        return Err(AppError::BadRequest(format!("{} not allowed", op)));
    }
    Ok(table)
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let table = resolve_table(&state, &path_segment, Operation::Read)?;
    let data = CrudService::list(&state.pool, table).await?;
    Ok(rows(data))
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let table = resolve_table(&state, &path_segment, Operation::Create)?;
    let body = body_to_map(body)?;
    let created = CrudService::create(&state.pool, table, &body).await?;
    tracing::info!(table = table.table_name, "row created");
    Ok(row(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let table = resolve_table(&state, &path_segment, Operation::Update)?;
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    let affected = CrudService::update(&state.pool, table, id, &body).await?;
    tracing::info!(table = table.table_name, id, affected, "row updated");
    Ok(confirmation(format!("{} was updated!", table.label)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let table = resolve_table(&state, &path_segment, Operation::Delete)?;
    let id = parse_id(&id_str)?;
    let affected = CrudService::delete(&state.pool, table, id).await?;
    tracing::info!(table = table.table_name, id, affected, "row deleted");
    Ok(confirmation(format!("{} was deleted!", table.label)))
}
