pub mod drink;
pub use drink::{Drink, DrinkChanges, Ingredient, NewDrink, Recipe};
