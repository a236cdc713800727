use std::sync::Arc;

use crate::{
    auth::TokenValidator,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::SqliteDrinkRepository,
    services::DrinkService,
};

#[derive(Clone)]
pub struct AppState {
    pub drink_service: Arc<DrinkService>,
    pub token_validator: Arc<TokenValidator>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.run_migrations(config.reset_database).await?;

        let token_validator = TokenValidator::from_config(&config)?;

        Ok(Self::from_parts(db, token_validator, config))
    }

    pub fn from_parts(db: Database, token_validator: TokenValidator, config: Config) -> Self {
        let drink_repository = Arc::new(SqliteDrinkRepository::new(&db));
        let drink_service = Arc::new(DrinkService::new(drink_repository));

        Self {
            drink_service,
            token_validator: Arc::new(token_validator),
            db,
            config: Arc::new(config),
        }
    }
}
