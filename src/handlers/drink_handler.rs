use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthenticatedUser, RequirePermission},
    errors::AppError,
    models::dto::{
        request::{CreateDrinkRequest, UpdateDrinkRequest},
        response::{DeleteDrinkResponse, DrinksResponse},
    },
};

#[get("/drinks")]
pub async fn list_drinks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let drinks = state.drink_service.list_short().await?;
    Ok(HttpResponse::Ok().json(DrinksResponse::new(drinks)))
}

#[get(
    "/drinks-detail",
    wrap = "RequirePermission::new(crate::auth::GET_DRINKS_DETAIL)"
)]
pub async fn list_drink_details(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let drinks = state.drink_service.list_long().await?;
    Ok(HttpResponse::Ok().json(DrinksResponse::new(drinks)))
}

#[post("/drinks", wrap = "RequirePermission::new(crate::auth::POST_DRINKS)")]
pub async fn create_drink(
    state: web::Data<AppState>,
    request: web::Json<CreateDrinkRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    log::debug!("{} is creating a drink", auth.0.sub);
    let drink = state.drink_service.create_drink(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DrinksResponse::new(drink)))
}

#[patch("/drinks/{id}", wrap = "RequirePermission::new(crate::auth::PATCH_DRINKS)")]
pub async fn update_drink(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<UpdateDrinkRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let drink = state
        .drink_service
        .update_drink(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(DrinksResponse::new(vec![drink])))
}

#[delete("/drinks/{id}", wrap = "RequirePermission::new(crate::auth::DELETE_DRINKS)")]
pub async fn delete_drink(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let deleted = state.drink_service.delete_drink(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeleteDrinkResponse::new(deleted)))
}
