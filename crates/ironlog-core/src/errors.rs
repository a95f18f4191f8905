//! Application error type.
//!
//! Every fallible handler and service returns `Result<_, AppError>`. The
//! status code carries the rejection kind of the request pipeline:
//!
//! | Kind | Status |
//! |------|--------|
//! | Unauthenticated | 401 |
//! | Forbidden | 403 |
//! | Validation | 400 |
//! | Not found | 404 |
//! | Anything else | 500 |
//!
//! Server errors are logged and answered with a generic message so that
//! database or hashing failures never leak into response bodies.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    /// Structured payload attached to validation failures.
    pub details: Option<Value>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            details: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow!(message.into()))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(message.into()))
    }

    /// A 400 rejection carrying the full list of failures in `details`.
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::new(StatusCode::BAD_REQUEST, anyhow!(message.into())).with_details(details)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(error = ?self.error, status = %self.status, "Request failed");
            let body = Json(json!({ "error": "Internal Server Error" }));
            return (self.status, body).into_response();
        }

        let body = match self.details {
            Some(details) => json!({
                "error": self.error.to_string(),
                "details": details,
            }),
            None => json!({ "error": self.error.to_string() }),
        };

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
