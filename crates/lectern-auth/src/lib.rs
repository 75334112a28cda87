//! # Lectern Auth
//!
//! Bearer credential codec and access policy types for the Lectern API.
//!
//! This crate provides:
//!
//! - [`claims`]: the signed claim set carried by a bearer credential, the
//!   [`Role`](claims::Role) enum, and the verified [`AuthContext`](claims::AuthContext)
//! - [`token`]: credential issuance and verification (HS256, shared secret)
//! - [`policy`]: the immutable per-method access policy table
//!
//! # Example
//!
//! ```ignore
//! use lectern_auth::{Role, issue_token, verify_token};
//! use lectern_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! // Issue a credential after a successful login
//! let token = issue_token(42, "ada@example.com", Role::Student, &config)?;
//!
//! // Verify it on a later call
//! let ctx = verify_token(&token, &config)?;
//! assert_eq!(ctx.subject_id, 42);
//! ```

pub mod claims;
pub mod policy;
pub mod token;

// Re-export commonly used types at crate root
pub use claims::{AuthContext, Claims, Role};
pub use policy::{AccessRule, PolicyTable};
pub use token::{TokenError, issue_token, issue_token_at, verify_token};
