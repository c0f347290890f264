#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::recovery::RecoveryFailure;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Model provider error: {0}")]
    Provider(String),

    #[error("Model returned empty content")]
    EmptyCompletion,

    #[error(transparent)]
    Recovery(#[from] RecoveryFailure),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => AppError::EmptyCompletion,
            other => AppError::Provider(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Only POST is accepted on this endpoint".to_string(),
            ),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    msg.clone(),
                )
            }
            AppError::Provider(msg) => {
                tracing::error!("Model provider error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROVIDER_ERROR",
                    msg.clone(),
                )
            }
            AppError::EmptyCompletion => {
                tracing::error!("Model returned empty content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EMPTY_COMPLETION",
                    "The model returned an empty reply".to_string(),
                )
            }
            AppError::Recovery(failure) => {
                tracing::error!("Recovery failure: {failure}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_COMPLETION",
                    failure.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
