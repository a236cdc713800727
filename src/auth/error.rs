use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorResponse;

/// Authorization failure raised while checking a bearer token.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    HeaderMissing,

    #[error("{0}")]
    HeaderMalformed(&'static str),

    #[error("Unable to obtain signing keys: {0}")]
    KeySetUnavailable(String),

    #[error("Unable to find the appropriate signing key")]
    UnknownSigningKey,

    #[error("Token expired")]
    TokenExpired,

    #[error("Incorrect claims, check the audience and issuer")]
    InvalidClaims,

    #[error("Unable to verify token: {0}")]
    InvalidToken(String),

    #[error("Permissions not included in token")]
    PermissionsMissing,

    #[error("Permission not found")]
    PermissionDenied,
}

/// Machine readable description of an [`AuthError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthErrorPayload {
    pub code: &'static str,
    pub description: String,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "authorization_header_missing",
            AuthError::HeaderMalformed(_)
            | AuthError::KeySetUnavailable(_)
            | AuthError::UnknownSigningKey
            | AuthError::InvalidToken(_) => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
        }
    }

    pub fn payload(&self) -> AuthErrorPayload {
        AuthErrorPayload {
            code: self.code(),
            description: self.to_string(),
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::PermissionsMissing => StatusCode::BAD_REQUEST,
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let payload = self.payload();
        ErrorResponse::new(self.status_code(), payload.description).into_response()
    }
}
