use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;

use crate::{
    auth::AuthError,
    errors::{AppError, AppResult},
};

/// Supplies the signing keys tokens are verified against.
///
/// Implementations are asked for the key set on every verification; nothing
/// is cached between requests.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn key_set(&self) -> Result<JwkSet, AuthError>;
}

/// A key set loaded once at startup.
pub struct StaticKeySet {
    keys: JwkSet,
}

impl StaticKeySet {
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let keys: JwkSet = serde_json::from_str(json)
            .map_err(|e| AppError::InternalError(format!("Invalid JWKS document: {}", e)))?;
        Ok(Self::new(keys))
    }

    pub fn from_file(path: &str) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::InternalError(format!("Failed to read JWKS file '{}': {}", path, e)))?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl KeySource for StaticKeySet {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        Ok(self.keys.clone())
    }
}

/// A key set fetched from the issuer's JWKS endpoint on every call.
pub struct RemoteKeySet {
    url: String,
    client: reqwest::Client,
}

impl RemoteKeySet {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl KeySource for RemoteKeySet {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                log::error!("Failed to fetch JWKS from {}: {}", self.url, e);
                AuthError::KeySetUnavailable(e.to_string())
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            log::error!("Failed to parse JWKS from {}: {}", self.url, e);
            AuthError::KeySetUnavailable(e.to_string())
        })
    }
}
