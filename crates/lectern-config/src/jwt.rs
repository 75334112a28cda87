//! Bearer credential configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET_KEY`: shared HMAC signing secret
//! - `TOKEN_EXPIRATION_HOURS`: credential lifetime in hours (default: 24)

use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry_hours: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET_KEY")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiry_hours: env::var("TOKEN_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
        }
    }
}
