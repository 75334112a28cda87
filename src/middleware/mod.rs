//! Middleware modules for request processing.
//!
//! This module contains the access-control layer every `/api` call passes
//! through, plus the extractor handlers use to read the verified caller
//! identity.
//!
//! # Modules
//!
//! - [`access`]: the per-call access gate (policy lookup, credential
//!   verification, role enforcement)
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) extractor for handlers that
//!   need the caller's identity
//!
//! # Request Flow
//!
//! 1. Client sends a request, optionally with `Authorization: Bearer <token>`
//! 2. [`access::enforce_access`] resolves the method key and consults the
//!    policy table
//! 3. Public methods forward immediately; everything else requires a valid
//!    credential, and role-restricted methods additionally require the
//!    matching role claim
//! 4. On success the verified identity is attached to the request and the
//!    handler runs; on failure the call terminates with 401 or 403

pub mod access;
pub mod auth;
