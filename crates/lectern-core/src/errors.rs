//! Application error type with HTTP response conversion.
//!
//! Every fallible handler and service in the application returns [`AppError`].
//! The error carries the HTTP status code it maps to plus an [`anyhow::Error`]
//! with the human-readable message (and source chain, for wrapped errors).
//! Converting into a response produces a JSON body of the form
//! `{"error": "<message>"}`.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    /// 401: no usable identity was established for the call.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(msg.into()))
    }

    /// 403: identity established, but the caller is not allowed to do this.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(msg.into()))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, anyhow::anyhow!(msg.into()))
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, anyhow::anyhow!(msg.into()))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, anyhow::anyhow!(msg.into()))
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow::anyhow!(msg.into()))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_status_codes() {
        assert_eq!(
            AppError::unauthorized("no token").status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::forbidden("wrong role").status,
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::not_found("missing").status, StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::bad_request("bad input").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::conflict("duplicate").status, StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal_error("boom").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_preserved() {
        let err = AppError::forbidden("role mismatch: need instructor, have student");
        assert_eq!(
            err.error.to_string(),
            "role mismatch: need instructor, have student"
        );
    }

    #[test]
    fn test_from_wraps_as_internal() {
        let io_err = std::io::Error::other("disk on fire");
        let err: AppError = io_err.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
