use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::SharedDirectory;

/// GET /employees/{pen}
pub async fn get_employee(
    State(directory): State<SharedDirectory>,
    Path(pen): Path<String>,
) -> Result<Json<BTreeMap<String, String>>, (StatusCode, Json<Value>)> {
    match directory.get(&pen) {
        Some(record) => Ok(Json(record.data.clone())),
        None => {
            tracing::debug!("No employee with PEN '{}'", pen);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Employee '{}' not found", pen) })),
            ))
        }
    }
}
