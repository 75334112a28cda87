//! The access gate every `/api` call passes through.
//!
//! [`AccessControl`] classifies each call against the policy table and, when
//! the rule demands it, verifies the bearer credential and enforces the role
//! claim, all before any business logic runs. The decision is binary and
//! final per call: forward, or reject with 401/403.
//!
//! The gate holds only the policy table and the signing configuration, both
//! immutable after startup, so one instance is shared across every
//! concurrent request without locking. Independently configured instances
//! can be built for tests.

use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use lectern_auth::{AccessRule, AuthContext, PolicyTable, verify_token};
use lectern_config::JwtConfig;
use lectern_core::AppError;

/// Per-call access gate: policy table plus credential verification.
#[derive(Clone, Debug)]
pub struct AccessControl {
    policy: Arc<PolicyTable>,
    jwt_config: JwtConfig,
}

impl AccessControl {
    pub fn new(policy: PolicyTable, jwt_config: JwtConfig) -> Self {
        Self {
            policy: Arc::new(policy),
            jwt_config,
        }
    }

    /// Decides whether a call may proceed.
    ///
    /// Returns the verified caller identity for non-public methods, `None`
    /// for public ones. Any rejection is a terminal 401 (no usable
    /// credential) or 403 (credential fine, role not allowed).
    pub fn authorize(
        &self,
        method_key: &str,
        headers: &HeaderMap,
    ) -> Result<Option<AuthContext>, AppError> {
        let rule = self.policy.lookup(method_key);

        if rule == AccessRule::Public {
            debug!(method = method_key, outcome = "forwarded", "public method");
            return Ok(None);
        }

        let context = self.authenticate(method_key, headers)?;

        if let AccessRule::RoleRestricted(required) = rule {
            let role = context.role().map_err(|_| {
                warn!(
                    method = method_key,
                    outcome = "forbidden",
                    role = %context.role,
                    "role claim missing or unknown"
                );
                AppError::forbidden("role missing")
            })?;

            if role != required {
                warn!(
                    method = method_key,
                    outcome = "forbidden",
                    role = %role,
                    required = %required,
                    "role mismatch"
                );
                return Err(AppError::forbidden(format!(
                    "role mismatch: need {}, have {}",
                    required, role
                )));
            }
        }

        debug!(
            method = method_key,
            outcome = "forwarded",
            subject_id = context.subject_id,
            role = %context.role,
            "credential accepted"
        );

        Ok(Some(context))
    }

    /// Extracts and verifies the bearer credential.
    ///
    /// The reason a credential fails (expired, bad signature, malformed) is
    /// logged server-side but never echoed to the client; both rejection
    /// paths carry a fixed generic message.
    fn authenticate(&self, method_key: &str, headers: &HeaderMap) -> Result<AuthContext, AppError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                warn!(
                    method = method_key,
                    outcome = "unauthenticated",
                    "missing bearer credential"
                );
                AppError::unauthorized("missing credential")
            })?;

        verify_token(token, &self.jwt_config).map_err(|e| {
            warn!(
                method = method_key,
                outcome = "unauthenticated",
                reason = %e,
                "credential rejected"
            );
            AppError::unauthorized("invalid or expired credential")
        })
    }
}

/// Axum middleware wrapping every `/api` route.
///
/// Resolves the method key (`"<METHOD> <matched-route-template>"`) from the
/// routing result, runs the access decision, and attaches the verified
/// identity to the request for downstream handlers. The wrapped handler is
/// never invoked on a rejected call.
pub async fn enforce_access(
    State(access): State<AccessControl>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let method_key = format!("{} {}", req.method(), route);

    if let Some(context) = access.authorize(&method_key, req.headers())? {
        req.extensions_mut().insert(context);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use lectern_auth::{Role, issue_token};

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry_hours: 1,
        }
    }

    fn test_gate() -> AccessControl {
        let policy = PolicyTable::from_rules([
            ("POST /api/students/login", AccessRule::Public),
            (
                "POST /api/courses",
                AccessRule::RoleRestricted(Role::Instructor),
            ),
            (
                "POST /api/enrollments",
                AccessRule::RoleRestricted(Role::Student),
            ),
        ]);
        AccessControl::new(policy, test_jwt_config())
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_public_method_without_credential_forwards() {
        let gate = test_gate();
        let decision = gate
            .authorize("POST /api/students/login", &HeaderMap::new())
            .unwrap();
        assert!(decision.is_none());
    }

    #[test]
    fn test_unlisted_method_without_credential_rejected() {
        let gate = test_gate();
        let err = gate
            .authorize("GET /api/unknown", &HeaderMap::new())
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "missing credential");
    }

    #[test]
    fn test_unlisted_method_with_valid_credential_forwards() {
        let gate = test_gate();
        let token = issue_token(5, "a@b.com", Role::Student, &test_jwt_config()).unwrap();

        let context = gate
            .authorize("GET /api/unknown", &bearer_headers(&token))
            .unwrap()
            .unwrap();
        assert_eq!(context.subject_id, 5);
        assert_eq!(context.email, "a@b.com");
    }

    #[test]
    fn test_invalid_credential_rejected_with_generic_message() {
        let gate = test_gate();
        let err = gate
            .authorize("GET /api/unknown", &bearer_headers("not-a-real-token"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "invalid or expired credential");
    }

    #[test]
    fn test_expired_credential_rejected() {
        let gate = test_gate();
        let expired_config = JwtConfig {
            secret: test_jwt_config().secret,
            token_expiry_hours: -1,
        };
        let token = issue_token(5, "a@b.com", Role::Student, &expired_config).unwrap();

        let err = gate
            .authorize("GET /api/unknown", &bearer_headers(&token))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "invalid or expired credential");
    }

    #[test]
    fn test_credential_signed_with_other_secret_rejected() {
        let gate = test_gate();
        let other = JwtConfig {
            secret: "some_other_secret_entirely".to_string(),
            token_expiry_hours: 1,
        };
        let token = issue_token(5, "a@b.com", Role::Instructor, &other).unwrap();

        let err = gate
            .authorize("POST /api/courses", &bearer_headers(&token))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_role_mismatch_rejected_forbidden() {
        let gate = test_gate();
        let token = issue_token(5, "a@b.com", Role::Student, &test_jwt_config()).unwrap();

        let err = gate
            .authorize("POST /api/courses", &bearer_headers(&token))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(
            err.error.to_string(),
            "role mismatch: need instructor, have student"
        );
    }

    #[test]
    fn test_role_match_forwards_with_context() {
        let gate = test_gate();
        let token = issue_token(5, "a@b.com", Role::Instructor, &test_jwt_config()).unwrap();

        let context = gate
            .authorize("POST /api/courses", &bearer_headers(&token))
            .unwrap()
            .unwrap();
        assert_eq!(context.subject_id, 5);
        assert_eq!(context.role().unwrap(), Role::Instructor);
    }

    #[test]
    fn test_invalid_credential_beats_role_check() {
        // A bad token on a role-restricted method is 401, not 403: the role
        // is never even looked at without an established identity.
        let gate = test_gate();
        let err = gate
            .authorize("POST /api/courses", &bearer_headers("garbage"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_empty_bearer_token_is_missing_credential() {
        let gate = test_gate();
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));

        let err = gate.authorize("GET /api/unknown", &headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "missing credential");
    }

    #[test]
    fn test_non_bearer_scheme_is_missing_credential() {
        let gate = test_gate();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        let err = gate.authorize("GET /api/unknown", &headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
