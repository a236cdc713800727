#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde_json::{json, Value};

    use crate::{
        app_state::AppState,
        auth::{StaticKeySet, TokenValidator},
        config::Config,
        db::Database,
        repositories::SqliteDrinkRepository,
        services::DrinkService,
    };

    pub const TEST_KID: &str = "test-signing-key";
    pub const TEST_JWKS: &str = include_str!("../tests/fixtures/jwks.json");
    pub const TEST_SIGNING_KEY: &str = include_str!("../tests/fixtures/signing_key.pem");

    pub fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    /// Claims accepted by [`test_token_validator`], granting `permissions`.
    pub fn claims_with(permissions: &[&str]) -> Value {
        let config = Config::test_config();
        json!({
            "sub": "auth0|test-user",
            "iss": config.issuer(),
            "aud": config.api_audience,
            "iat": now(),
            "exp": now() + 3600,
            "permissions": permissions,
        })
    }

    /// Signs `claims` with the fixture RSA key, advertising `kid` in the header.
    pub fn sign_token(kid: &str, claims: &Value) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());

        let key = EncodingKey::from_rsa_pem(TEST_SIGNING_KEY.as_bytes()).unwrap();
        encode(&header, claims, &key).unwrap()
    }

    pub fn test_token_validator() -> TokenValidator {
        let config = Config::test_config();
        let keys = StaticKeySet::from_json(TEST_JWKS).unwrap();
        TokenValidator::new(Arc::new(keys), &config.api_audience, &config.issuer())
    }

    pub async fn test_database() -> Database {
        let db = Database::connect(&Config::test_config()).await.unwrap();
        db.run_migrations(false).await.unwrap();
        db
    }

    pub async fn test_drink_service() -> DrinkService {
        let db = test_database().await;
        DrinkService::new(Arc::new(SqliteDrinkRepository::new(&db)))
    }

    pub async fn test_app_state() -> AppState {
        AppState::from_parts(test_database().await, test_token_validator(), Config::test_config())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_token_has_key_id() {
        let token = sign_token(TEST_KID, &claims_with(&["get:drinks-detail"]));
        let header = jsonwebtoken::decode_header(&token).unwrap();

        assert_eq!(header.kid.as_deref(), Some(TEST_KID));
        assert_eq!(header.alg, jsonwebtoken::Algorithm::RS256);
    }

    #[test]
    fn test_fixture_claims() {
        let claims = claims_with(&["post:drinks"]);
        assert_eq!(claims["permissions"][0], "post:drinks");
        assert!(claims["exp"].as_i64().unwrap() > now());
    }
}
