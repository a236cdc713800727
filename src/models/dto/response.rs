use serde::Serialize;

use crate::models::domain::drink::{Drink, Recipe, RecipeSummary};

/// Public view of a drink: ingredient quantities are left out.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: RecipeSummary,
}

/// Full view of a drink, for callers allowed to see the recipe.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

impl From<&Drink> for DrinkShort {
    fn from(drink: &Drink) -> Self {
        DrinkShort {
            id: drink.id,
            title: drink.title.clone(),
            recipe: drink.recipe.summary(),
        }
    }
}

impl From<Drink> for DrinkLong {
    fn from(drink: Drink) -> Self {
        DrinkLong {
            id: drink.id,
            title: drink.title,
            recipe: drink.recipe,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: T,
}

impl<T> DrinksResponse<T> {
    pub fn new(drinks: T) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub delete: i64,
}

impl DeleteDrinkResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}
