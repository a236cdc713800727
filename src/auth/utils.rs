use actix_web::http::header::HeaderValue;

use crate::auth::{AuthError, Claims};

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
///
/// The value must consist of exactly two space-separated parts, the first of
/// which is the bearer scheme.
pub fn extract_bearer_token(header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = header
        .ok_or(AuthError::HeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::HeaderMalformed("Authorization header is not valid text"))?;

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::HeaderMalformed("Authorization header must start with \"Bearer\""),
        ),
        [_] | [_, ""] => Err(AuthError::HeaderMalformed("Token not found")),
        [_, token] => Ok(*token),
        _ => Err(AuthError::HeaderMalformed(
            "Authorization header must be bearer token",
        )),
    }
}

pub fn require_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let granted = claims.permissions()?;
    if !granted.iter().any(|p| p == permission) {
        return Err(AuthError::PermissionDenied);
    }
    Ok(())
}
