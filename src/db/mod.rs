use secrecy::ExposeSecret;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

const CREATE_DRINKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS drinks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL UNIQUE,
        recipe TEXT NOT NULL
    )
"#;

const SEED_RECIPE: &str = r#"[{"name": "water", "color": "blue", "parts": 1}]"#;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let url = config.database_url.expose_secret();
        let mut options = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(5));

        // An in-memory database lives only as long as its connection.
        if url.contains(":memory:") {
            options = options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect(url).await?;

        sqlx::query("SELECT 1").execute(&pool).await?;
        log::info!("Connected to database");

        Ok(Self { pool })
    }

    /// Creates the schema. With `reset` the table is dropped first and
    /// reseeded with a single drink.
    pub async fn run_migrations(&self, reset: bool) -> AppResult<()> {
        if reset {
            log::info!("Dropping and recreating the drinks table");
            sqlx::query("DROP TABLE IF EXISTS drinks")
                .execute(&self.pool)
                .await?;
        }

        sqlx::query(CREATE_DRINKS_TABLE).execute(&self.pool).await?;

        if reset {
            sqlx::query("INSERT INTO drinks (title, recipe) VALUES (?, ?)")
                .bind("water")
                .bind(SEED_RECIPE)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
