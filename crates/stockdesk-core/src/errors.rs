//! Application error type shared by every route handler.
//!
//! Authentication failures are deliberately indistinguishable from the
//! outside: whichever sub-reason triggered them (missing header, bad
//! signature, expired token, insufficient role), the client sees the same
//! 401 body. The [`ErrorKind`] carries the real reason into the logs so
//! operators can still tell the cases apart.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Uniform message returned for every token or role failure.
pub const UNAUTHORIZED_DETAIL: &str = "Token is invalid or expired";

/// Internal classification of an error, never serialized to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No `Authorization` header on a protected route.
    TokenMissing,
    /// Header present but not a `Bearer <token>` scheme.
    TokenMalformed,
    /// Signature mismatch, corrupt encoding, or expired claims.
    TokenInvalid,
    /// Valid token, but the stored role does not grant access.
    RoleDenied,
    /// Login attempt with an unknown subject or wrong secret.
    InvalidCredentials,
    BadRequest,
    Validation,
    NotFound,
    Database,
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            kind,
            error: err.into(),
        }
    }

    /// An authenticator failure. The external message is fixed no matter
    /// which `kind` is recorded.
    pub fn unauthorized(kind: ErrorKind) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            kind,
            anyhow::anyhow!(UNAUTHORIZED_DETAIL),
        )
    }

    /// A failed login. Distinct message from token failures so clients can
    /// tell "re-enter your password" from "re-login".
    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidCredentials,
            anyhow::anyhow!("Invalid credentials"),
        )
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, ErrorKind::BadRequest, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, ErrorKind::Validation, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, ErrorKind::NotFound, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Database, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = ?self.kind, error = %self.error, "request failed");
        } else {
            tracing::warn!(kind = ?self.kind, error = %self.error, "request rejected");
        }

        let body = Json(json!({
            "detail": self.error.to_string()
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
    fn unauthorized_message_is_uniform_across_kinds() {
        for kind in [
            ErrorKind::TokenMissing,
            ErrorKind::TokenMalformed,
            ErrorKind::TokenInvalid,
            ErrorKind::RoleDenied,
        ] {
            let err = AppError::unauthorized(kind);
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.error.to_string(), UNAUTHORIZED_DETAIL);
        }
    }

    #[test]
    fn invalid_credentials_has_distinct_message() {
        let err = AppError::invalid_credentials();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "Invalid credentials");
    }

    #[test]
    fn from_anyhow_maps_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
