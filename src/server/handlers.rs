use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

pub async fn calculate(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(CalculateRequest { expression }) = payload?;
    match crate::evaluate(&expression) {
        Ok(result) => {
            tracing::debug!(%expression, result, "evaluated");
            Ok(Json(CalculateResponse { result }))
        }
        Err(err) => {
            tracing::debug!(%expression, error = %err, kind = ?err.kind(), "rejected");
            Err(err.into())
        }
    }
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "service healthy".to_owned(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
