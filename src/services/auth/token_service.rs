//! # 세션 토큰 서비스
//!
//! 로그인 완료 후 발급하는 HS256 세션 JWT를 생성하고 검증합니다.
//! Google이 발급한 ID 토큰과는 무관하며, 이 서버의 `JWT_SECRET`으로만 서명됩니다.
//!
//! ```text
//! BaseUser ──generate_access_token──► "eyJ..." ──verify_token──► TokenClaims
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::entities::users::BaseUser,
    domain::models::token::TokenClaims,
    errors::{AppError, AppResult},
};

pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 사용자에 대한 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않아 ID가 없는 사용자이거나 인코딩 실패
    pub fn generate_access_token(&self, user: &BaseUser) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            email: user.email.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 세션 토큰의 서명과 만료를 검증합니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// 세션 쿠키 유지 시간 (초)
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
