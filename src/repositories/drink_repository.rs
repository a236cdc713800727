use async_trait::async_trait;
use sqlx::{types::Json, FromRow, Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Drink, DrinkChanges, NewDrink, Recipe},
};

#[async_trait]
pub trait DrinkRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Drink>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>>;
    async fn create(&self, drink: NewDrink) -> AppResult<Drink>;
    async fn update(&self, id: i64, changes: DrinkChanges) -> AppResult<Drink>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(FromRow)]
struct DrinkRow {
    id: i64,
    title: String,
    recipe: Json<Recipe>,
}

impl From<DrinkRow> for Drink {
    fn from(row: DrinkRow) -> Self {
        Drink {
            id: row.id,
            title: row.title,
            recipe: row.recipe.0,
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Drink with id '{}' not found", id))
}

/// Commits on success, rolls back on any error.
async fn finish<T>(tx: Transaction<'_, Sqlite>, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                log::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}

pub struct SqliteDrinkRepository {
    pool: SqlitePool,
}

impl SqliteDrinkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    async fn insert_in(conn: &mut SqliteConnection, drink: &NewDrink) -> AppResult<Drink> {
        let row = sqlx::query_as::<_, DrinkRow>(
            "INSERT INTO drinks (title, recipe) VALUES (?, ?) RETURNING id, title, recipe",
        )
        .bind(&drink.title)
        .bind(Json(&drink.recipe))
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }

    /// Absent fields keep their stored value. The read and the write are a
    /// single statement so concurrent updates queue on the write lock.
    async fn update_in(
        conn: &mut SqliteConnection,
        id: i64,
        changes: DrinkChanges,
    ) -> AppResult<Drink> {
        let row = sqlx::query_as::<_, DrinkRow>(
            "UPDATE drinks SET title = COALESCE(?, title), recipe = COALESCE(?, recipe) \
             WHERE id = ? RETURNING id, title, recipe",
        )
        .bind(changes.title)
        .bind(changes.recipe.map(Json))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(row.into())
    }

    async fn delete_in(conn: &mut SqliteConnection, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

#[async_trait]
impl DrinkRepository for SqliteDrinkRepository {
    async fn find_all(&self) -> AppResult<Vec<Drink>> {
        let rows = sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Drink::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>> {
        let row = sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drinks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Drink::from))
    }

    async fn create(&self, drink: NewDrink) -> AppResult<Drink> {
        let mut tx = self.pool.begin().await?;
        let result = Self::insert_in(&mut *tx, &drink).await;
        finish(tx, result).await
    }

    async fn update(&self, id: i64, changes: DrinkChanges) -> AppResult<Drink> {
        let mut tx = self.pool.begin().await?;
        let result = Self::update_in(&mut *tx, id, changes).await;
        finish(tx, result).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let result = Self::delete_in(&mut *tx, id).await;
        finish(tx, result).await
    }
}
