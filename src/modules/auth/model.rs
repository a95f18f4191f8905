//! Signup and login DTOs, re-exported from `ironlog-models`.

pub use ironlog_models::users::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse,
};
