pub mod drink_repository;

pub use drink_repository::{DrinkRepository, SqliteDrinkRepository};
