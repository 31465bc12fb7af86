//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 클라이언트 정보, 세션 토큰(JWT), OAuth state 쿠키 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_OAUTH2_CLIENT_ID="your-google-client-id"
//! export GOOGLE_OAUTH2_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_OAUTH2_PROJECT_ID="your-google-project-id"
//! ```
//!
//! 세 값 중 하나라도 비어 있으면 로그인 플로우 생성 단계에서
//! `AppError::ConfigurationError`가 발생합니다. 첫 요청까지 미루지 않습니다.
//!
//! ### JWT 세션 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ## Google 엔드포인트
//!
//! | 용도 | 상수 |
//! |------|------|
//! | Authorization | [`GOOGLE_AUTH_URL`] |
//! | Token Exchange | [`GOOGLE_ACCESS_TOKEN_OBTAIN_URL`] |
//! | User Info | [`GOOGLE_USER_INFO_URL`] |

use std::env;

/// Google 인증(동의) 페이지
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";

/// Authorization Code → 토큰 교환 엔드포인트
pub const GOOGLE_ACCESS_TOKEN_OBTAIN_URL: &str = "https://oauth2.googleapis.com/token";

/// 사용자 프로필 조회 엔드포인트
pub const GOOGLE_USER_INFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// 로그인 시 요청하는 OAuth 스코프
pub const GOOGLE_SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/userinfo.profile",
    "openid",
];

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 환경 변수에서 읽어옵니다.
/// 값이 없으면 빈 문자열을 반환하며, 누락 여부 판단은
/// `GoogleSdkLoginCredentials::new`가 담당합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub const CLIENT_ID_VAR: &'static str = "GOOGLE_OAUTH2_CLIENT_ID";
    pub const CLIENT_SECRET_VAR: &'static str = "GOOGLE_OAUTH2_CLIENT_SECRET";
    pub const PROJECT_ID_VAR: &'static str = "GOOGLE_OAUTH2_PROJECT_ID";

    /// Google OAuth Client ID
    pub fn client_id() -> String {
        env::var(Self::CLIENT_ID_VAR).unwrap_or_default()
    }

    /// Google OAuth Client Secret
    ///
    /// 이 값을 로그에 출력하지 마세요.
    pub fn client_secret() -> String {
        env::var(Self::CLIENT_SECRET_VAR).unwrap_or_default()
    }

    /// Google Cloud 프로젝트 ID
    pub fn project_id() -> String {
        env::var(Self::PROJECT_ID_VAR).unwrap_or_default()
    }
}

/// JWT 세션 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 키
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 세션 토큰 유효 시간 (시간 단위, 기본 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// OAuth 세션 관련 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// state 쿠키 이름
    pub const STATE_COOKIE: &'static str = "google_oauth2_state";

    /// 로그인 완료 후 세션 토큰을 담는 쿠키 이름
    pub const SESSION_COOKIE: &'static str = "access_token";

    /// state 쿠키 유지 시간 (분 단위, 기본 10)
    pub fn state_timeout_minutes() -> i64 {
        env::var("OAUTH_STATE_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_include_openid() {
        assert!(GOOGLE_SCOPES.contains(&"openid"));
        assert_eq!(GOOGLE_SCOPES.len(), 3);
    }

    #[test]
    fn test_endpoints_are_https() {
        for url in [GOOGLE_AUTH_URL, GOOGLE_ACCESS_TOKEN_OBTAIN_URL, GOOGLE_USER_INFO_URL] {
            assert!(url.starts_with("https://"));
        }
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }
}
