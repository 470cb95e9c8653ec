//! Token signing configuration.
//!
//! The secret and algorithm are read once at startup and are read-only for
//! the life of the process.

use std::env;

use jsonwebtoken::Algorithm;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes.
    pub access_token_expiry_minutes: i64,
}

impl JwtConfig {
    /// Load from `JWT_SECRET`, `JWT_ALGORITHM` and `JWT_ACCESS_EXPIRY_MINUTES`.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            algorithm: env::var("JWT_ALGORITHM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Algorithm::HS256),
            access_token_expiry_minutes: env::var("JWT_ACCESS_EXPIRY_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Access token lifetime in seconds.
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_minutes_convert_to_seconds() {
        let config = JwtConfig {
            secret: "secret".into(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 30,
        };
        assert_eq!(config.access_token_expiry_seconds(), 1800);
    }
}
