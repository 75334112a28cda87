//! CORS configuration.
//!
//! # Environment Variables
//!
//! - `CORS_ALLOWED_ORIGINS`: comma-separated list of allowed origins
//!   (default: `http://localhost:3000`)

use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            allowed_origins: origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_list_parsing() {
        let config = CorsConfig {
            allowed_origins: "http://a.example, http://b.example"
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        };
        assert_eq!(
            config.allowed_origins,
            vec!["http://a.example", "http://b.example"]
        );
    }
}
