//! Response helpers. Rows go out as bare JSON arrays and objects, mutations without a row
//! answer with a confirmation string.

use axum::{http::StatusCode, Json};
use serde_json::Value;

pub fn rows(data: Vec<Value>) -> (StatusCode, Json<Vec<Value>>) {
    (StatusCode::OK, Json(data))
}

/// A single row; create answers 200 with the stored row.
pub fn row(data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(data))
}

pub fn confirmation(message: String) -> (StatusCode, Json<String>) {
    (StatusCode::OK, Json(message))
}
