//! Serde helpers used by request DTOs.
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct CreateExerciseDto {
//!     #[serde(deserialize_with = "ironlog_core::de::sanitized")]
//!     name: String,
//!     #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
//!     description: Option<String>,
//! }
//! ```

use serde::{Deserialize, Deserializer};

use crate::sanitize::sanitize_text;

pub fn sanitized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(sanitize_text(&raw))
}

/// Like [`sanitized`], but a value that is blank after sanitizing becomes `None`.
pub fn optional_sanitized<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| sanitize_text(&value))
        .filter(|value| !value.is_empty()))
}
