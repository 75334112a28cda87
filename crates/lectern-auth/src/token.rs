//! Bearer credential issuance and verification.
//!
//! Credentials are JWTs signed with a single shared HS256 secret. Issuance
//! happens once after a successful login or registration; verification runs
//! on every protected call. Both directions are pure CPU work against the
//! secret and the current time.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use lectern_config::JwtConfig;
use lectern_core::AppError;

use crate::claims::{AuthContext, Claims, Role};

/// Why a credential failed verification.
///
/// The distinction exists for server-side logging only. Callers of the API
/// always see a single generic "invalid or expired credential" outcome so
/// the token structure cannot be probed.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("credential has expired")]
    Expired,
    #[error("credential signature is invalid")]
    InvalidSignature,
    #[error("credential is malformed")]
    Malformed,
}

/// Issues a signed bearer credential for an authenticated subject.
///
/// The claim set carries the subject id, email, and role, with
/// `iat = now` and `exp = now + token_expiry_hours`.
///
/// # Arguments
///
/// * `subject_id` - The student or instructor id
/// * `email` - The subject's email address
/// * `role` - The role the credential asserts
/// * `jwt_config` - Signing secret and credential lifetime
///
/// # Errors
///
/// Returns an internal error if signing fails. This is the only internal
/// error the credential layer can produce; verification never needs one.
pub fn issue_token(
    subject_id: i64,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    issue_token_at(subject_id, email, role, jwt_config, Utc::now())
}

/// Issues a credential as of an explicit instant.
///
/// [`issue_token`] delegates here with the real clock; tests inject a fixed
/// `issued_at` to get deterministic tokens and to mint already-expired ones.
pub fn issue_token_at(
    subject_id: i64,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
    issued_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let expires_at = issued_at + Duration::hours(jwt_config.token_expiry_hours);

    let claims = Claims {
        sub: subject_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: issued_at.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a bearer credential and returns the caller's identity.
///
/// Checks, in order: the string decodes into the expected claim shape, the
/// HMAC matches the shared secret (constant-time comparison inside
/// `jsonwebtoken`), and the expiry timestamp is still in the future (zero
/// leeway). Only HS256 is accepted; a credential claiming any other
/// algorithm fails verification.
///
/// # Errors
///
/// - [`TokenError::Expired`] if `exp` is in the past
/// - [`TokenError::InvalidSignature`] if the MAC does not match
/// - [`TokenError::Malformed`] for anything that does not decode into the
///   expected claim shape, including a non-numeric subject id
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<AuthContext, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    let claims = data.claims;
    let subject_id = claims.sub.parse::<i64>().map_err(|_| TokenError::Malformed)?;

    Ok(AuthContext {
        subject_id,
        email: claims.email,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry_hours: 24,
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let config = get_test_jwt_config();

        let token = issue_token(5, "a@b.com", Role::Student, &config).unwrap();
        let ctx = verify_token(&token, &config).unwrap();

        assert_eq!(ctx.subject_id, 5);
        assert_eq!(ctx.email, "a@b.com");
        assert_eq!(ctx.role, "student");
        assert_eq!(ctx.role().unwrap(), Role::Student);
    }

    #[test]
    fn test_issue_token_all_roles() {
        let config = get_test_jwt_config();

        for role in [Role::Student, Role::Instructor] {
            let token = issue_token(1, "test@example.com", role, &config).unwrap();
            let ctx = verify_token(&token, &config).unwrap();
            assert_eq!(ctx.role().unwrap(), role);
        }
    }

    #[test]
    fn test_issuance_is_deterministic_for_fixed_clock() {
        let config = get_test_jwt_config();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let a = issue_token_at(7, "x@y.com", Role::Instructor, &config, at).unwrap();
        let b = issue_token_at(7, "x@y.com", Role::Instructor, &config, at).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_verify_with_wrong_secret_fails() {
        let config = get_test_jwt_config();
        let token = issue_token(5, "a@b.com", Role::Student, &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "a_completely_different_secret_key".to_string(),
            token_expiry_hours: 24,
        };

        let err = verify_token(&token, &wrong_config).unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature));
    }

    #[test]
    fn test_expired_at_issuance_always_fails() {
        // A ttl of -1 hour puts exp in the past the moment the token is born.
        let config = JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry_hours: -1,
        };

        let token = issue_token(5, "a@b.com", Role::Student, &config).unwrap();
        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn test_old_token_expires() {
        let config = get_test_jwt_config();
        // Issued 25 hours ago with a 24 hour lifetime.
        let at = Utc::now() - Duration::hours(25);
        let token = issue_token_at(5, "a@b.com", Role::Student, &config, at).unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn test_tampered_token_fails() {
        let config = get_test_jwt_config();
        let token = issue_token(5, "a@b.com", Role::Student, &config).unwrap();

        // Flip a character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let payload = &parts[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        parts[1] = format!("{}{}", flipped, &payload[1..]);
        let tampered = parts.join(".");

        assert!(verify_token(&tampered, &config).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let config = get_test_jwt_config();

        for garbage in ["", "not-a-token", "a.b", "a.b.c.d"] {
            let err = verify_token(garbage, &config).unwrap_err();
            assert!(matches!(err, TokenError::Malformed), "input: {:?}", garbage);
        }
    }

    #[test]
    fn test_non_numeric_subject_is_malformed() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "a@b.com".to_string(),
            role: "student".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err, TokenError::Malformed));
    }

    #[test]
    fn test_unknown_role_survives_verification() {
        // Verification only fixes the claim shape; an unknown role string is
        // the access layer's problem, where it fails the role check.
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: "5".to_string(),
            email: "a@b.com".to_string(),
            role: "janitor".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let ctx = verify_token(&token, &config).unwrap();
        assert!(ctx.role().is_err());
    }
}
