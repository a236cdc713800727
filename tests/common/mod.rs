#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::SecretString;
use serde_json::{json, Value};

use drinks_server::{
    app_state::AppState,
    auth::{StaticKeySet, TokenValidator},
    config::Config,
    db::Database,
};

pub const TEST_KID: &str = "test-signing-key";
pub const TEST_JWKS: &str = include_str!("../fixtures/jwks.json");
pub const TEST_SIGNING_KEY: &str = include_str!("../fixtures/signing_key.pem");

pub const ALL_PERMISSIONS: [&str; 4] = [
    "get:drinks-detail",
    "post:drinks",
    "patch:drinks",
    "delete:drinks",
];

/// Builds the test app with the same routes and fallbacks as the server.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(drinks_server::middleware::RequestIdMiddleware)
                .configure(drinks_server::handlers::configure)
                .default_service(actix_web::web::to(drinks_server::handlers::route_not_found)),
        )
        .await
    };
}

pub fn test_config() -> Config {
    Config {
        database_url: SecretString::from("sqlite::memory:".to_string()),
        database_max_connections: 1,
        reset_database: false,
        auth0_domain: "test-tenant.auth0.com".to_string(),
        api_audience: "drinks-test".to_string(),
        jwks_url: None,
        jwks_path: None,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: "*".to_string(),
    }
}

pub async fn test_database() -> Database {
    let db = Database::connect(&test_config())
        .await
        .expect("in-memory database should open");
    db.run_migrations(false).await.expect("schema should apply");
    db
}

pub async fn test_state() -> AppState {
    let config = test_config();
    let keys = StaticKeySet::from_json(TEST_JWKS).expect("fixture JWKS should parse");
    let validator = TokenValidator::new(Arc::new(keys), &config.api_audience, &config.issuer());

    AppState::from_parts(test_database().await, validator, config)
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn claims_with(permissions: &[&str]) -> Value {
    let config = test_config();
    json!({
        "sub": "auth0|integration",
        "iss": config.issuer(),
        "aud": config.api_audience,
        "iat": now(),
        "exp": now() + 3600,
        "permissions": permissions,
    })
}

pub fn sign_token(kid: &str, claims: &Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());

    let key = EncodingKey::from_rsa_pem(TEST_SIGNING_KEY.as_bytes()).expect("fixture key should load");
    encode(&header, claims, &key).expect("token should sign")
}

/// `Authorization` header value for a token carrying `permissions`.
pub fn bearer(permissions: &[&str]) -> String {
    format!("Bearer {}", sign_token(TEST_KID, &claims_with(permissions)))
}

pub fn latte() -> Value {
    json!({
        "title": "latte",
        "recipe": [
            {"name": "espresso", "color": "brown", "parts": 1},
            {"name": "milk", "color": "white", "parts": 3}
        ]
    })
}
