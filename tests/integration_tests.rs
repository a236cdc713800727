mod common;

use drinks_server::{
    app_state::AppState,
    auth::TokenValidator,
    models::{
        domain::{Drink, Ingredient, Recipe},
        dto::response::{DrinkLong, DrinkShort},
    },
};

#[actix_web::test]
async fn test_drink_views_serialization() {
    let drink = Drink {
        id: 1,
        title: "Integration".to_string(),
        recipe: Recipe::Single(Ingredient {
            name: "tea".to_string(),
            color: "green".to_string(),
            parts: 2,
        }),
    };

    let short = serde_json::to_value(DrinkShort::from(&drink)).unwrap();
    assert_eq!(
        short,
        serde_json::json!({"id": 1, "title": "Integration", "recipe": {"name": "tea", "color": "green"}})
    );

    let long = serde_json::to_value(DrinkLong::from(drink.clone())).unwrap();
    let round_trip: Drink = serde_json::from_value(long).unwrap();
    assert_eq!(drink, round_trip);
}

#[actix_web::test]
async fn test_reset_database_seeds_water() {
    let mut config = common::test_config();
    config.reset_database = true;
    config.jwks_path = Some(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/jwks.json").to_string());

    let state = AppState::new(config).await.expect("state should build");
    let drinks = state.drink_service.list_long().await.unwrap();

    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].title, "water");
    assert_eq!(drinks[0].recipe.steps()[0].color, "blue");
}

#[actix_web::test]
async fn test_token_validator_from_config_with_missing_jwks_file() {
    let mut config = common::test_config();
    config.jwks_path = Some("/nonexistent/jwks.json".to_string());

    assert!(TokenValidator::from_config(&config).is_err());

    // Without a file the validator points at the remote key set and builds fine
    config.jwks_path = None;
    assert!(TokenValidator::from_config(&config).is_ok());
}
