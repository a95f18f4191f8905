//! Rate limiting for the credential endpoints.
//!
//! Signup and login are guarded by a token bucket keyed on the client IP:
//!
//! - `RATE_LIMIT_ENABLED`: set to `false` to disable the limiter (default: true)
//! - `RATE_LIMIT_AUTH_PER_SECOND`: seconds between token replenishments (default: 10)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: bucket size (default: 5)
//!
//! The key is the TCP peer address, so the server must be served with
//! `into_make_service_with_connect_info::<SocketAddr>()`. Forwarding headers
//! are ignored; a client cannot pick its own bucket.

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::env_or;

pub type AuthGovernorConfig =
    GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub auth_per_second: u64,
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth_per_second: 10,
            auth_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// Values below one are raised to one so the governor config always builds.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_or("RATE_LIMIT_ENABLED", defaults.enabled),
            auth_per_second: env_or("RATE_LIMIT_AUTH_PER_SECOND", defaults.auth_per_second).max(1),
            auth_burst_size: env_or("RATE_LIMIT_AUTH_BURST_SIZE", defaults.auth_burst_size).max(1),
        }
    }

    /// Creates the governor config applied to `/auth` routes.
    ///
    /// # Panics
    ///
    /// Panics if either limit is zero.
    #[must_use]
    pub fn auth_governor_config(&self) -> AuthGovernorConfig {
        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second)
            .burst_size(self.auth_burst_size)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("Failed to build auth rate limiter config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.auth_per_second, 10);
        assert_eq!(config.auth_burst_size, 5);
    }

    #[test]
    fn test_auth_governor_config_builds() {
        let config = RateLimitConfig {
            enabled: true,
            auth_per_second: 1,
            auth_burst_size: 1,
        };
        let _governor = config.auth_governor_config();
    }
}
