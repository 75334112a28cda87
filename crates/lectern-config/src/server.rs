//! HTTP server listen configuration.
//!
//! # Environment Variables
//!
//! - `HTTP_HOST`: bind address (default: `0.0.0.0`)
//! - `HTTP_PORT`: listen port (default: `8080`)

use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("HTTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_format() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9999,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
    }
}
