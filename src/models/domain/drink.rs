use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// One step of a recipe: an ingredient, the colour it shows in the cup and how many parts of it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Ingredient with the quantity stripped, for public listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IngredientSummary {
    pub name: String,
    pub color: String,
}

/// A recipe is either a single ingredient or an ordered list of them.
/// The shape supplied on write is the shape stored and returned.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Recipe {
    Single(Ingredient),
    Steps(Vec<Ingredient>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecipeSummary {
    Single(IngredientSummary),
    Steps(Vec<IngredientSummary>),
}

impl Recipe {
    pub fn steps(&self) -> &[Ingredient] {
        match self {
            Recipe::Single(ingredient) => std::slice::from_ref(ingredient),
            Recipe::Steps(steps) => steps,
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        match self {
            Recipe::Single(ingredient) => RecipeSummary::Single(ingredient.into()),
            Recipe::Steps(steps) => RecipeSummary::Steps(steps.iter().map(Into::into).collect()),
        }
    }
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ingredient: &Ingredient) -> Self {
        IngredientSummary {
            name: ingredient.name.clone(),
            color: ingredient.color.clone(),
        }
    }
}

/// Rejects empty recipes and steps with a blank name, blank colour or zero parts.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationError> {
    let steps = recipe.steps();
    if steps.is_empty() {
        return Err(ValidationError::new("empty_recipe"));
    }

    for step in steps {
        if step.name.trim().is_empty() || step.color.trim().is_empty() {
            return Err(ValidationError::new("blank_ingredient"));
        }
        if step.parts == 0 {
            return Err(ValidationError::new("zero_parts"));
        }
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

/// A drink that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Recipe,
}

/// Field changes for an existing drink; `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrinkChanges {
    pub title: Option<String>,
    pub recipe: Option<Recipe>,
}
