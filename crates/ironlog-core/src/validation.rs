//! Validation helpers shared by the request boundary and the services.
//!
//! [`validate_payload`] runs the `validator` rules of a DTO and turns every
//! failure into a single 400 response whose `details` maps field paths to
//! messages, e.g. `{"exercises[0].sets": ["must be at least 1"]}`. Field
//! names are reported in camelCase, matching the JSON the client sent.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

pub const VALIDATION_FAILED: &str = "Validation failed";

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|errors| AppError::validation(VALIDATION_FAILED, format_errors(&errors)))
}

/// Flattens nested validation errors into `{ "path": ["message", ...] }`.
pub fn format_errors(errors: &ValidationErrors) -> Value {
    let mut fields = BTreeMap::new();
    collect(errors, "", &mut fields);
    serde_json::to_value(fields).unwrap_or(Value::Null)
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut BTreeMap<String, Vec<String>>) {
    for (field, kind) in errors.errors() {
        let field = camel_case(field);
        let path = if prefix.is_empty() {
            field
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.entry(path)
                    .or_default()
                    .extend(list.iter().map(describe));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let param = |name: &str| error.params.get(name).map(render_param);

    match error.code.as_ref() {
        "required" => "is required".to_string(),
        "email" => "must be a valid email address".to_string(),
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {} characters", min, max),
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            (None, None) => "has an invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {}", min),
            (None, Some(max)) => format!("must be at most {}", max),
            (None, None) => "is out of range".to_string(),
        },
        other => format!("failed {} validation", other),
    }
}

fn render_param(value: &Value) -> String {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns the requested references absent from `found`, in request order
/// and without duplicates.
pub fn missing_references<T>(requested: &[T], found: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let found: HashSet<&T> = found.iter().collect();
    let mut seen = HashSet::new();

    requested
        .iter()
        .filter(|value| !found.contains(value) && seen.insert(*value))
        .cloned()
        .collect()
}

/// Rejects strings that are empty once whitespace is trimmed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;
    use validator::Validate;

    #[derive(Serialize, Validate)]
    struct Row {
        #[validate(range(min = 1))]
        sets: i32,
        #[validate(range(min = 0.0))]
        weight: f64,
    }

    #[derive(Validate)]
    struct Session {
        #[validate(length(min = 2))]
        title: String,
        #[validate(custom(function = "not_blank"))]
        coach: String,
        #[validate(length(min = 1), nested)]
        rows: Vec<Row>,
    }

    #[test]
    fn test_nested_list_errors_are_flattened() {
        let session = Session {
            title: "x".to_string(),
            coach: "Sam".to_string(),
            rows: vec![
                Row { sets: 3, weight: 20.0 },
                Row { sets: 0, weight: -1.0 },
            ],
        };

        let err = validate_payload(&session).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);

        let details = err.details.unwrap();
        assert_eq!(details["title"], json!(["must be at least 2 characters"]));
        assert_eq!(details["rows[1].sets"], json!(["must be at least 1"]));
        assert_eq!(details["rows[1].weight"], json!(["must be at least 0"]));
        assert!(details.get("rows[0].sets").is_none());
    }

    #[test]
    fn test_custom_message_is_used() {
        let session = Session {
            title: "Push".to_string(),
            coach: "   ".to_string(),
            rows: vec![Row { sets: 1, weight: 0.0 }],
        };

        let details = validate_payload(&session).unwrap_err().details.unwrap();
        assert_eq!(details["coach"], json!(["must not be blank"]));
    }

    #[test]
    fn test_valid_payload_passes() {
        let session = Session {
            title: "Push".to_string(),
            coach: "Sam".to_string(),
            rows: vec![Row { sets: 5, weight: 60.0 }],
        };
        assert!(validate_payload(&session).is_ok());
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("category_name"), "categoryName");
        assert_eq!(camel_case("sets"), "sets");
        assert_eq!(camel_case("one_rep_max_kg"), "oneRepMaxKg");
        assert_eq!(camel_case("__all__"), "all");
    }

    #[test]
    fn test_missing_references_preserves_order_and_dedups() {
        let requested = vec![1, 7, 2, 9, 7];
        let found = vec![1, 2];
        assert_eq!(missing_references(&requested, &found), vec![7, 9]);
    }

    #[test]
    fn test_missing_references_empty_when_all_known() {
        let requested = vec!["a", "b"];
        let found = vec!["b", "a", "c"];
        assert!(missing_references(&requested, &found).is_empty());
    }
}
