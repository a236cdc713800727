use std::sync::Arc;

use actix_web::http::header::HeaderValue;
use jsonwebtoken::{decode, decode_header, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::{
    auth::{
        keys::{KeySource, RemoteKeySet, StaticKeySet},
        utils::{extract_bearer_token, require_permission},
        AuthError, Claims,
    },
    config::Config,
    errors::AppResult,
};

/// Verifies RS256 access tokens against a signing-key set, audience and issuer.
#[derive(Clone)]
pub struct TokenValidator {
    keys: Arc<dyn KeySource>,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(keys: Arc<dyn KeySource>, audience: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_issuer(&[issuer]);

        Self { keys, validation }
    }

    /// Uses the JWKS file when `JWKS_PATH` is set, otherwise the issuer's JWKS endpoint.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let keys: Arc<dyn KeySource> = match &config.jwks_path {
            Some(path) => {
                log::info!("Loading signing keys from {}", path);
                Arc::new(StaticKeySet::from_file(path)?)
            }
            None => {
                let remote = RemoteKeySet::new(config.remote_jwks_url());
                log::info!("Signing keys will be fetched from {}", remote.url());
                Arc::new(remote)
            }
        };

        Ok(Self::new(keys, &config.api_audience, &config.issuer()))
    }

    pub async fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token)
            .map_err(|_| AuthError::HeaderMalformed("Unable to parse authentication token"))?;
        let kid = header
            .kid
            .ok_or(AuthError::HeaderMalformed("Authorization malformed: token has no key id"))?;

        let key_set = self.keys.key_set().await?;
        let jwk = key_set.find(&kid).ok_or(AuthError::UnknownSigningKey)?;
        let decoding_key =
            DecodingKey::from_jwk(jwk).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        decode::<Claims>(token, &decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }

    /// Full check for a protected route: header, token, then the required permission.
    pub async fn authorize(
        &self,
        header: Option<&HeaderValue>,
        permission: &str,
    ) -> Result<Claims, AuthError> {
        let token = extract_bearer_token(header)?;
        let claims = self.validate_token(token).await?;
        require_permission(&claims, permission)?;
        Ok(claims)
    }
}
