//! # Google SDK 로그인 핸들러
//!
//! ```text
//! GET /api/google-oauth2/login/sdk/redirect
//!     └─ state 쿠키 저장 후 302 → accounts.google.com
//!
//! GET /api/google-oauth2/login/sdk/callback?code=..&state=..
//!     ├─ error 파라미터          → 400 {"error": <error>}
//!     ├─ code/state 누락         → 400 {"error": "Code and state are required."}
//!     ├─ state 쿠키 불일치       → 400 {"error": "CSRF check failed."}
//!     ├─ 등록되지 않은 이메일    → 404 {"error": "User with email <e> is not found."}
//!     └─ 성공                    → 200 {"id_token_decoded", "user_info"} + 세션 쿠키
//! ```
//!
//! state 쿠키는 콜백 응답마다 결과와 상관없이 삭제됩니다.

use actix_web::{get, http::header, web, HttpRequest, HttpResponse, ResponseError};
use serde_json::Value;
use crate::{
    config::OAuthConfig,
    core::ServiceLocator,
    domain::dto::oauth::{GoogleCallbackQuery, GoogleLoginResponse},
    errors::{AppError, AppResult, ErrorContext},
    handlers::cookies::{http_only_cookie, removal_cookie},
    services::{
        auth::{GoogleSdkLoginFlowService, TokenService},
        users::LoginUserLookup,
    },
};

/// Google 동의 화면으로 보냅니다.
#[get("/redirect")]
pub async fn google_login_redirect() -> Result<HttpResponse, AppError> {
    let flow = ServiceLocator::get::<GoogleSdkLoginFlowService>()?;

    let (authorization_url, state) = flow.get_authorization_url();
    let state_cookie = http_only_cookie(
        OAuthConfig::STATE_COOKIE,
        state,
        OAuthConfig::state_timeout_minutes() * 60,
    );

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, authorization_url))
        .cookie(state_cookie)
        .finish())
}

/// Google 콜백 (`callback-sdk`)
#[get("/callback")]
pub async fn google_login_callback(
    req: HttpRequest,
    query: web::Query<GoogleCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let stored_state = req
        .cookie(OAuthConfig::STATE_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let result = match verify_callback(&query, stored_state.as_deref()) {
        Ok((code, state)) => complete_login(code, state).await,
        Err(e) => Err(e),
    };

    let mut response = result.unwrap_or_else(|e| {
        log::warn!("Google 로그인 콜백 실패: {}", e);
        e.error_response()
    });

    response
        .add_removal_cookie(&removal_cookie(OAuthConfig::STATE_COOKIE))
        .context("state 쿠키 삭제 실패")?;

    Ok(response)
}

/// 콜백 파라미터와 저장된 state를 검사하고 `(code, state)`를 돌려줍니다.
pub fn verify_callback<'a>(
    query: &'a GoogleCallbackQuery,
    stored_state: Option<&str>,
) -> AppResult<(&'a str, &'a str)> {
    if let Some(error) = &query.error {
        return Err(AppError::ApplicationError(error.clone()));
    }

    let (Some(code), Some(state)) = (query.code.as_deref(), query.state.as_deref()) else {
        return Err(AppError::ValidationError("Code and state are required.".to_string()));
    };

    match stored_state {
        Some(stored) if stored == state => Ok((code, state)),
        _ => Err(AppError::ApplicationError("CSRF check failed.".to_string())),
    }
}

async fn complete_login(code: &str, state: &str) -> AppResult<HttpResponse> {
    let flow = ServiceLocator::get::<GoogleSdkLoginFlowService>()?;
    let user_lookup = ServiceLocator::get::<dyn LoginUserLookup>()?;
    let token_service = ServiceLocator::get::<TokenService>()?;

    let tokens = flow.get_tokens(code, state).await?;
    let id_token_decoded = tokens.decode_id_token()?;
    let user_info = flow.get_user_info(&tokens).await?;

    let email = id_token_decoded
        .get("email")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::ValidationError("Identity token has no email claim".to_string()))?;

    let user = user_lookup.get_by_email(email).await?;
    let session_token = token_service.generate_access_token(&user)?;

    log::info!("✅ Google 로그인 성공: {}", user);

    Ok(HttpResponse::Ok()
        .cookie(http_only_cookie(
            OAuthConfig::SESSION_COOKIE,
            session_token,
            token_service.expires_in_seconds(),
        ))
        .json(GoogleLoginResponse {
            id_token_decoded,
            user_info,
        }))
}
