use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{AuthError, Claims},
    errors::AppError,
    middleware::get_request_id,
};

/// Guards a route behind a bearer token carrying `permission`.
///
/// ```ignore
/// web::resource("/drinks").wrap(RequirePermission::new("post:drinks"))
/// ```
pub struct RequirePermission {
    permission: Rc<str>,
}

impl RequirePermission {
    pub fn new(permission: impl Into<String>) -> Self {
        let permission: String = permission.into();
        Self {
            permission: Rc::from(permission),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionService {
            service: Rc::new(service),
            permission: Rc::clone(&self.permission),
        }))
    }
}

pub struct RequirePermissionService<S> {
    service: Rc<S>,
    permission: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let permission = Rc::clone(&self.permission);

        Box::pin(async move {
            let Some(validator) = req
                .app_data::<web::Data<AppState>>()
                .map(|state| state.token_validator.clone())
            else {
                let err = AppError::InternalError("token validator not configured".to_string());
                return Ok(req.error_response(err).map_into_right_body());
            };

            let outcome = validator
                .authorize(req.headers().get(AUTHORIZATION), &permission)
                .await;

            match outcome {
                Ok(claims) => {
                    log::debug!("{} granted '{}'", claims.sub, permission);
                    req.extensions_mut().insert(claims);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    let payload = err.payload();
                    log::warn!(
                        "{} {} rejected [{}] request_id={}: {}",
                        req.method(),
                        req.path(),
                        get_request_id(req.request()).unwrap_or_default(),
                        payload.code,
                        payload.description
                    );
                    Ok(req.error_response(err).map_into_right_body())
                }
            }
        })
    }
}

// Extractor for the verified caller in guarded handlers
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or(AuthError::HeaderMissing);

        ready(claims.map(AuthenticatedUser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{self, TEST_KID};
    use actix_web::{http::StatusCode, test, App, HttpResponse};

    async fn whoami(auth: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(auth.0.sub)
    }

    #[actix_web::test]
    async fn test_guarded_route_requires_token() {
        let state = fixtures::test_app_state().await;
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::resource("/whoami")
                    .wrap(RequirePermission::new("get:drinks-detail"))
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let token = fixtures::sign_token(TEST_KID, &fixtures::claims_with(&["get:drinks-detail"]));
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "auth0|test-user");
    }

    #[actix_web::test]
    async fn test_authenticated_user_without_middleware() {
        let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
