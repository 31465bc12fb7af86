//! # Routes Module
//!
//! URL 접두사와 하위 라우트 그룹의 정적 매핑입니다.
//!
//! ```text
//! /health
//! /api
//! ├── /auth             (authentication)
//! ├── /users            (users, 인증 필요)
//! ├── /errors           (errors)
//! ├── /files            (files, 마운트되지 않음)
//! └── /google-oauth2    (google-oauth2)
//!     └── /login
//!         ├── /raw      (login-raw, 마운트되지 않음)
//!         └── /sdk      (login-sdk)
//! /ws
//! ├── /public           (session consumer, 인증 선택)
//! └── /private          (session consumer, 인증 필수)
//! ```
//!
//! 핸들러가 없는 그룹은 테이블에만 남고 마운트되지 않습니다. 해당 경로는 404입니다.

use actix_web::web;
use serde_json::json;
use crate::consumers::session_consumer;
use crate::domain::models::auth::AuthMode;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 접두사 하나와 그 아래 라우트들
pub struct RouteGroup {
    pub prefix: &'static str,
    pub namespace: &'static str,
    pub auth: Option<AuthMode>,
    pub configure: Option<fn(&mut web::ServiceConfig)>,
}

/// `/api` 아래 그룹
pub const API_ROUTES: [RouteGroup; 5] = [
    // /auth/me는 AuthenticatedUser 추출자가 401을 돌려줌
    RouteGroup { prefix: "/auth", namespace: "authentication", auth: Some(AuthMode::Optional), configure: Some(configure_auth_routes) },
    RouteGroup { prefix: "/users", namespace: "users", auth: Some(AuthMode::Required), configure: Some(configure_user_routes) },
    RouteGroup { prefix: "/errors", namespace: "errors", auth: None, configure: Some(configure_error_routes) },
    RouteGroup { prefix: "/files", namespace: "files", auth: None, configure: None },
    RouteGroup { prefix: "/google-oauth2", namespace: "google-oauth2", auth: None, configure: Some(configure_google_oauth2_routes) },
];

/// `/api/google-oauth2/login` 아래 그룹
pub const LOGIN_ROUTES: [RouteGroup; 2] = [
    RouteGroup { prefix: "/raw", namespace: "login-raw", auth: None, configure: None },
    RouteGroup { prefix: "/sdk", namespace: "login-sdk", auth: None, configure: Some(configure_login_sdk_routes) },
];

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(web::scope("/api").configure(|api| mount(api, &API_ROUTES)));
    cfg.service(web::scope("/ws").configure(configure_ws_routes));
}

fn mount(cfg: &mut web::ServiceConfig, groups: &[RouteGroup]) {
    for group in groups {
        let Some(configure) = group.configure else {
            log::debug!("라우트 그룹 {} ({}) 마운트 생략", group.prefix, group.namespace);
            continue;
        };

        let scope = web::scope(group.prefix).configure(configure);

        match group.auth {
            Some(mode) => cfg.service(scope.wrap(AuthMiddleware::new(mode))),
            None => cfg.service(scope),
        };
    }
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::get_current_user)
        .service(handlers::auth::logout);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::list_users)
        .service(handlers::users::get_user);
}

fn configure_error_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::errors::raise_error);
}

fn configure_google_oauth2_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/login").configure(|login| mount(login, &LOGIN_ROUTES)));
}

fn configure_login_sdk_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::google_login::google_login_redirect)
        .service(handlers::google_login::google_login_callback);
}

fn configure_ws_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/public")
            .app_data(web::Data::new(session_consumer(false)))
            .wrap(AuthMiddleware::optional())
            .route(web::get().to(handlers::ws::connect))
    );

    cfg.service(
        web::resource("/private")
            .app_data(web::Data::new(session_consumer(true)))
            .wrap(AuthMiddleware::optional())
            .route(web::get().to(handlers::ws::connect))
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "styleguide_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "websocket": "actix-ws",
            "login": "Google OAuth2 SDK flow"
        }
    }))
}
