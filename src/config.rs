use std::env;
use secrecy::SecretString;

pub const DEFAULT_AUTH0_DOMAIN: &str = "drinks.example.auth0.com";
pub const DEFAULT_API_AUDIENCE: &str = "drinks";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: SecretString,
    pub database_max_connections: u32,
    pub reset_database: bool,
    pub auth0_domain: String,
    pub api_audience: String,
    pub jwks_url: Option<String>,
    pub jwks_path: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: SecretString::from(env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://drinks.db?mode=rwc".to_string())),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            reset_database: env::var("RESET_DATABASE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            auth0_domain: env::var("AUTH0_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_AUTH0_DOMAIN.to_string()),
            api_audience: env::var("API_AUDIENCE")
                .unwrap_or_else(|_| DEFAULT_API_AUDIENCE.to_string()),
            jwks_url: env::var("JWKS_URL").ok().filter(|v| !v.is_empty()),
            jwks_path: env::var("JWKS_PATH").ok().filter(|v| !v.is_empty()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "*".to_string()),
        }
    }

    /// Token issuer, as Auth0 writes it into the `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }

    /// Where the signing keys are fetched from when no static key file is configured.
    pub fn remote_jwks_url(&self) -> String {
        self.jwks_url
            .clone()
            .unwrap_or_else(|| format!("https://{}/.well-known/jwks.json", self.auth0_domain))
    }

    /// Validate that production-critical configuration is set
    /// Panics if the auth settings are still the placeholders
    pub fn validate_for_production(&self) {
        if self.auth0_domain == DEFAULT_AUTH0_DOMAIN {
            panic!(
                "FATAL: AUTH0_DOMAIN is using default value! Set AUTH0_DOMAIN to your tenant domain."
            );
        }

        if self.api_audience == DEFAULT_API_AUDIENCE {
            panic!(
                "FATAL: API_AUDIENCE is using default value! Set API_AUDIENCE to the API identifier."
            );
        }

        if self.reset_database {
            log::warn!("RESET_DATABASE is set: all drinks will be dropped on startup");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
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
}
