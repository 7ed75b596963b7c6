use std::io;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::{handlers::ErrorResponse, shutdown::ShutdownError};
use crate::{config::ConfigError, errors::EvalError};

/// Errors a request can end with. Each maps to a status code and a
/// `{"error": ...}` body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("Not Found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Eval(_) | ApiError::Body(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "http error");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("shutdown failed: {0}")]
    Shutdown(#[from] ShutdownError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_failures_become_server_errors() {
        let err: ServerError = Config::from_lookup(|key| match key {
            "SERVER_PORT" => Some("eighty".to_owned()),
            _ => None,
        })
        .map_err(ServerError::from)
        .unwrap_err();
        assert!(matches!(err, ServerError::Config(ConfigError::Port(_))));
        assert_eq!(err.to_string(), "invalid SERVER_PORT \"eighty\"");
    }

    #[test]
    fn statuses() {
        assert_eq!(
            ApiError::from(EvalError::EmptyExpression).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(EvalError::NonFiniteResult {
                value: f64::INFINITY
            })
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }
}
