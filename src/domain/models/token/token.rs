//! 세션 JWT 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)에 사용자 필터 키(`email`, `is_admin`)를 더한 구조입니다.
use serde::{Deserialize, Serialize};

/// 세션 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 ID (ObjectId hex)
/// - `email`: 로그인한 사용자 이메일
/// - `is_admin`: 관리자 여부
/// - `iat` / `exp`: 발급 및 만료 시각 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}
