//! # 인증 미들웨어
//!
//! 세션 토큰을 검증하고 [`AuthenticatedUser`]를 request extensions에 넣습니다.
//!
//! 토큰은 다음 순서로 찾습니다.
//!
//! 1. `Authorization: Bearer <jwt>` 헤더
//! 2. `access_token` 쿠키 (Google 로그인 완료 시 발급)
//!
//! ```rust,ignore
//! web::scope("/users")
//!     .wrap(AuthMiddleware::required())   // 없거나 무효하면 401
//!
//! web::resource("/public")
//!     .wrap(AuthMiddleware::optional())   // 있으면 검증, 없어도 통과
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, web, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;
    use crate::config::OAuthConfig;
    use crate::domain::entities::users::BaseUser;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.to_string())
    }

    async fn maybe(OptionalUser(user): OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.map(|u| u.email).unwrap_or_else(|| "anonymous".to_string()))
    }

    fn session_token() -> String {
        let mut user = BaseUser::new("member@example.com".to_string(), false);
        user.id = Some(ObjectId::new());
        TokenService::from_env().generate_access_token(&user).unwrap()
    }

    #[actix_web::test]
    async fn test_required_without_token_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_with_bearer_token() {
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", session_token())))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "member@example.com");
    }

    #[actix_web::test]
    async fn test_required_with_session_cookie() {
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .cookie(Cookie::new(OAuthConfig::SESSION_COOKIE, session_token()))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "member@example.com");
    }

    #[actix_web::test]
    async fn test_required_with_garbage_token() {
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_passes_through() {
        let app = test::init_service(
            App::new().service(
                web::resource("/maybe")
                    .wrap(AuthMiddleware::optional())
                    .route(web::get().to(maybe)),
            ),
        ).await;

        let anonymous = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/maybe").to_request(),
        ).await;
        assert_eq!(anonymous, "anonymous");

        let invalid = test::call_and_read_body(
            &app,
            test::TestRequest::get()
                .uri("/maybe")
                .insert_header(("Authorization", "Bearer broken"))
                .to_request(),
        ).await;
        assert_eq!(invalid, "anonymous");

        let member = test::call_and_read_body(
            &app,
            test::TestRequest::get()
                .uri("/maybe")
                .insert_header(("Authorization", format!("Bearer {}", session_token())))
                .to_request(),
        ).await;
        assert_eq!(member, "member@example.com");
    }
}
