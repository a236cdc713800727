use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::drink::{validate_recipe, DrinkChanges, NewDrink, Recipe},
};

fn check_recipe(recipe: &Recipe) -> AppResult<()> {
    validate_recipe(recipe).map_err(|e| AppError::ValidationError(format!("recipe: {}", e)))
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    #[validate(required(message = "title is required"), length(min = 1, max = 80))]
    pub title: Option<String>,

    #[validate(required(message = "recipe is required"))]
    pub recipe: Option<Recipe>,
}

impl CreateDrinkRequest {
    pub fn into_new_drink(self) -> AppResult<NewDrink> {
        self.validate()?;

        match (self.title, self.recipe) {
            (Some(title), Some(recipe)) => {
                check_recipe(&recipe)?;
                Ok(NewDrink { title, recipe })
            }
            _ => Err(AppError::ValidationError(
                "title and recipe are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    #[validate(length(min = 1, max = 80))]
    pub title: Option<String>,

    pub recipe: Option<Recipe>,
}

impl UpdateDrinkRequest {
    pub fn into_changes(self) -> AppResult<DrinkChanges> {
        self.validate()?;

        if let Some(recipe) = &self.recipe {
            check_recipe(recipe)?;
        }

        Ok(DrinkChanges {
            title: self.title,
            recipe: self.recipe,
        })
    }
}
