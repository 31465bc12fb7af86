use std::fmt;
use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::domain::models::token::TokenClaims;

/// 세션 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId hex)
    pub user_id: String,

    /// 사용자 이메일
    pub email: String,

    /// 관리자 여부
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            is_admin: claims.is_admin,
        }
    }
}

/// 사용자 표시 문자열은 이메일입니다.
impl fmt::Display for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 request extensions에 넣어둔 사용자를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::InternalError::from_response(
                "unauthenticated",
                actix_web::HttpResponse::Unauthorized()
                    .json(json!({ "error": "Authentication required" })),
            )
            .into())),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "65f0c0ffee0000000000beef".to_string(),
            email: "admin@example.com".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn test_display_is_email() {
        assert_eq!(user().to_string(), "admin@example.com");
    }

    #[test]
    fn test_from_claims() {
        let claims = TokenClaims {
            sub: "abc".to_string(),
            email: "a@example.com".to_string(),
            is_admin: false,
            iat: 0,
            exp: 1,
        };

        let user = AuthenticatedUser::from(claims);

        assert_eq!(user.user_id, "abc");
        assert!(!user.is_admin());
    }

    #[actix_web::test]
    async fn test_extractor_reads_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(user());

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted, user());

        let OptionalUser(optional) = OptionalUser::extract(&req).await.unwrap();
        assert!(optional.is_some());
    }

    #[actix_web::test]
    async fn test_extractor_without_user() {
        let req = TestRequest::default().to_http_request();

        assert!(AuthenticatedUser::extract(&req).await.is_err());

        let OptionalUser(optional) = OptionalUser::extract(&req).await.unwrap();
        assert!(optional.is_none());
    }
}
