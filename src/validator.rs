//! `ValidatedJson`: the boundary where request bodies become typed DTOs.
//!
//! Malformed JSON is rejected with a single message; well-formed bodies are
//! then checked with their `validator` rules and every failing field is
//! reported under `details`.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use ironlog_core::{AppError, validate_payload};

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

fn reject(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if let Some(rest) = error_msg.split("missing field `").nth(1) {
        let field = rest.split('`').next().unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("unknown variant") {
        let variant = error_msg
            .split("unknown variant `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(anyhow!("'{}' is not an accepted value", variant));
    }

    if error_msg.contains("invalid type") || error_msg.contains("invalid value") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if error_msg.contains("UUID") || error_msg.contains("uuid") {
        return AppError::bad_request(anyhow!("Invalid identifier in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject)?;

        validate_payload(&value)?;

        Ok(ValidatedJson(value))
    }
}
