//! # Ironlog Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed browser origins
//! - [`rate_limit`]: limits for the credential endpoints
//! - [`storage`]: upload directory and public file URLs
//! - [`server`]: listen ports
//!
//! Every `from_env()` falls back to a default when a variable is unset or
//! cannot be parsed.
//!
//! # Example
//!
//! ```ignore
//! use ironlog_config::{CorsConfig, JwtConfig, RateLimitConfig, StorageConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let rate_limit_config = RateLimitConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod rate_limit;
pub mod server;
pub mod storage;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use std::str::FromStr;

pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok(), default)
}

pub(crate) fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or::<u16>(None, 3000), 3000);
        assert_eq!(parse_or::<u16>(Some("8080".into()), 3000), 8080);
        assert_eq!(parse_or::<u16>(Some(" 81 ".into()), 3000), 81);
        assert_eq!(parse_or::<u16>(Some("abc".into()), 3000), 3000);
        assert!(!parse_or::<bool>(Some("false".into()), true));
    }
}
