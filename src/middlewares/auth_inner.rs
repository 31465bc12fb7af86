use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::OAuthConfig;
use crate::core::ServiceLocator;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let token_service = ServiceLocator::try_get::<TokenService>()
                .unwrap_or_else(|| Arc::new(TokenService::from_env()));

            let auth_result = authenticate_request(&req, &token_service);

            match (mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패 {}: {}", req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({ "error": err.to_string() }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                (_, Ok(user)) => {
                    log::debug!("인증 성공: {}", user);
                    req.extensions_mut().insert(user);
                },
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증: {}, 요청 진행", err);
                },
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 헤더 또는 쿠키에서 세션 토큰을 찾아 검증합니다.
fn authenticate_request(req: &ServiceRequest, token_service: &TokenService) -> AppResult<AuthenticatedUser> {
    let header_token = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|header| token_service.extract_bearer_token(header).map(str::to_string))
        .transpose()?;

    let token = match header_token {
        Some(token) => token,
        None => req
            .cookie(OAuthConfig::SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::AuthenticationError("Authentication required".to_string()))?,
    };

    let claims = token_service.verify_token(&token)?;

    Ok(AuthenticatedUser::from(claims))
}
