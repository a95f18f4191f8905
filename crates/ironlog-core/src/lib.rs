//! # Ironlog Core
//!
//! Core types, errors, and utilities for the Ironlog API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`de`]: Deserializers that sanitize strings at the request boundary
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`file_storage`]: Storage backends for uploaded exercise images
//! - [`pagination`]: Pagination utilities for API responses
//! - [`password`]: Password hashing and verification
//! - [`sanitize`]: Script/HTML stripping for user-supplied text
//! - [`validation`]: Structured formatting of validation failures
//!
//! # Example
//!
//! ```ignore
//! use ironlog_core::{AppError, PaginationParams, hash_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Workout not found"));
//! let hash = hash_password("secure_password")?;
//! let limit = PaginationParams::default().limit();
//! ```

pub mod de;
pub mod errors;
pub mod file_storage;
pub mod pagination;
pub mod password;
pub mod sanitize;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{hash_password, verify_password};
pub use sanitize::sanitize_text;
pub use validation::{missing_references, validate_payload};
