pub mod drink_handler;
pub mod health_handler;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;

pub use drink_handler::{create_drink, delete_drink, list_drink_details, list_drinks, update_drink};
pub use health_handler::{health_check, health_check_ready};

/// Registers every route along with the extractor error handlers that keep
/// failures in the standard error body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .service(health_check)
    .service(health_check_ready)
    .service(list_drinks)
    .service(list_drink_details)
    .service(create_drink)
    .service(update_drink)
    .service(delete_drink);
}

/// Fallback for requests no route matched.
pub async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("no such route".to_string()))
}
