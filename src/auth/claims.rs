use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Claims carried by an access token issued for the drinks API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (caller id)
    #[serde(default)]
    pub iss: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    #[serde(default)]
    pub iat: usize, // Issued at (as UTC timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// The permission set granted to the caller.
    pub fn permissions(&self) -> Result<&[String], AuthError> {
        self.permissions
            .as_deref()
            .ok_or(AuthError::PermissionsMissing)
    }
}
