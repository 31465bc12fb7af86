//! 세션 핸들러 (`/api/auth`)

use actix_web::{get, post, HttpResponse};
use serde_json::json;
use crate::config::OAuthConfig;
use crate::core::ServiceLocator;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::handlers::cookies::removal_cookie;
use crate::services::users::UserService;

/// 현재 세션의 사용자
#[get("/me")]
pub async fn get_current_user(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<UserService>()?;
    let current = service.get_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(current)))
}

/// 세션 쿠키를 지웁니다. 토큰 자체는 만료 시각까지 유효합니다.
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie(OAuthConfig::SESSION_COOKIE))
        .json(json!({ "message": "logged out" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_logout_clears_session_cookie() {
        let app = test::init_service(App::new().service(logout)).await;

        let resp = test::call_service(&app, test::TestRequest::post().uri("/logout").to_request()).await;

        assert!(resp.status().is_success());
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == OAuthConfig::SESSION_COOKIE)
            .map(|c| c.max_age());
        assert_eq!(cookie, Some(Some(actix_web::cookie::time::Duration::ZERO)));
    }
}
