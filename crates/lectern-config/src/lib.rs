//! # Lectern Config
//!
//! Configuration types for the Lectern API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Signing secret and token lifetime for bearer credentials
//! - [`server`]: HTTP listen address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use lectern_config::{JwtConfig, ServerConfig, CorsConfig};
//!
//! // Load all configs from environment
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
