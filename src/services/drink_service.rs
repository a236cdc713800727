use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::dto::{
        request::{CreateDrinkRequest, UpdateDrinkRequest},
        response::{DrinkLong, DrinkShort},
    },
    repositories::DrinkRepository,
};

pub struct DrinkService {
    repository: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(repository: Arc<dyn DrinkRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_short(&self) -> AppResult<Vec<DrinkShort>> {
        let drinks = self.repository.find_all().await?;
        Ok(drinks.iter().map(DrinkShort::from).collect())
    }

    pub async fn list_long(&self) -> AppResult<Vec<DrinkLong>> {
        let drinks = self.repository.find_all().await?;
        Ok(drinks.into_iter().map(DrinkLong::from).collect())
    }

    pub async fn create_drink(&self, request: CreateDrinkRequest) -> AppResult<DrinkLong> {
        let new_drink = request.into_new_drink()?;
        let drink = self.repository.create(new_drink).await?;
        log::info!("Created drink {} '{}'", drink.id, drink.title);
        Ok(drink.into())
    }

    pub async fn update_drink(&self, id: i64, request: UpdateDrinkRequest) -> AppResult<DrinkLong> {
        let changes = request.into_changes()?;
        let drink = self.repository.update(id, changes).await?;
        log::info!("Updated drink {}", drink.id);
        Ok(drink.into())
    }

    pub async fn delete_drink(&self, id: i64) -> AppResult<i64> {
        self.repository.delete(id).await?;
        log::info!("Deleted drink {}", id);
        Ok(id)
    }
}
