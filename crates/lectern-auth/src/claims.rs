//! Claim structures for bearer credentials.
//!
//! A credential is a signed, self-contained claim set: subject id, email,
//! role, and the issued-at/expiry timestamps. There is no server-side token
//! store; expiry is enforced purely by comparing the embedded timestamp to
//! the current time at verification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two roles a caller can hold.
///
/// The role model is flat: there is no hierarchy and no role that bypasses
/// checks. A method either requires one specific role or it does not care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role claim does not name a known role.
#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// The claim set embedded in a bearer credential.
///
/// The shape is fixed: decoding rejects credentials that are missing any of
/// these fields. The role travels as a string and is parsed into [`Role`]
/// at the point where a policy rule requires one.
///
/// # Fields
///
/// - `sub`: Subject id (the student or instructor id, as a string)
/// - `email`: Subject's email address
/// - `role`: Role claim (`"student"` or `"instructor"`)
/// - `exp`: Expiry timestamp (Unix timestamp)
/// - `iat`: Issued-at timestamp (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Subject id (subject claim)
    pub sub: String,
    /// Subject's email address
    pub email: String,
    /// Role claim
    pub role: String,
    /// Expiry timestamp (Unix timestamp)
    pub exp: usize,
    /// Issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// The verified identity attached to a call after its credential passed
/// verification.
///
/// Lives for exactly one request; handlers read it from request extensions
/// when they need the caller's identity (for example, to restrict a student
/// to their own profile).
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub subject_id: i64,
    pub email: String,
    pub role: String,
}

impl AuthContext {
    /// Parse the role claim into a [`Role`].
    pub fn role(&self) -> Result<Role, ParseRoleError> {
        self.role.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "5".to_string(),
            email: "test@example.com".to_string(),
            role: "student".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"5""#));
        assert!(serialized.contains(r#""role":"student""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"17","email":"user@test.com","role":"instructor","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "17");
        assert_eq!(claims.role, "instructor");
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_claims_missing_role_rejected() {
        let json = r#"{"sub":"17","email":"user@test.com","exp":9999999999,"iat":9999999900}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_role_roundtrip() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("instructor".parse::<Role>().unwrap(), Role::Instructor);
        assert_eq!(Role::Student.to_string(), "student");
        assert_eq!(Role::Instructor.to_string(), "instructor");
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("Student".parse::<Role>().is_err());
    }

    #[test]
    fn test_auth_context_role_parse() {
        let ctx = AuthContext {
            subject_id: 5,
            email: "a@b.com".to_string(),
            role: "instructor".to_string(),
        };
        assert_eq!(ctx.role().unwrap(), Role::Instructor);

        let bad = AuthContext {
            subject_id: 5,
            email: "a@b.com".to_string(),
            role: "superuser".to_string(),
        };
        assert!(bad.role().is_err());
    }
}
