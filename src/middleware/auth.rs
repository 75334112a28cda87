//! Extractor for the verified caller identity.
//!
//! The access gate attaches an [`AuthContext`] to every non-public call it
//! forwards. Handlers that care who is calling (ownership checks, caller
//! scoped queries) take an [`AuthUser`] argument and get that context; no
//! second verification happens here.

use axum::{extract::FromRequestParts, http::request::Parts};

use lectern_auth::{AuthContext, Role};
use lectern_core::AppError;

/// The authenticated caller, as established by the access gate.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl AuthUser {
    pub fn subject_id(&self) -> i64 {
        self.0.subject_id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// The caller's role.
    pub fn role(&self) -> Result<Role, AppError> {
        self.0.role().map_err(|_| AppError::forbidden("role missing"))
    }

    /// Whether the caller is the subject with the given id.
    pub fn is_subject(&self, id: i64) -> bool {
        self.0.subject_id == id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("missing credential"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(role: &str) -> AuthContext {
        AuthContext {
            subject_id: 5,
            email: "a@b.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_accessors() {
        let user = AuthUser(context("instructor"));
        assert_eq!(user.subject_id(), 5);
        assert_eq!(user.email(), "a@b.com");
        assert_eq!(user.role().unwrap(), Role::Instructor);
    }

    #[test]
    fn test_is_subject() {
        let user = AuthUser(context("student"));
        assert!(user.is_subject(5));
        assert!(!user.is_subject(6));
    }

    #[test]
    fn test_unknown_role_is_forbidden() {
        let user = AuthUser(context("registrar"));
        assert!(user.role().is_err());
    }
}
