pub mod claims;
pub mod error;
pub mod jwt;
pub mod keys;
pub mod middleware;
pub mod utils;

pub use claims::Claims;
pub use error::{AuthError, AuthErrorPayload};
pub use jwt::TokenValidator;
pub use keys::{KeySource, RemoteKeySet, StaticKeySet};
pub use middleware::{AuthenticatedUser, RequirePermission};
pub use utils::{extract_bearer_token, require_permission};

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";
