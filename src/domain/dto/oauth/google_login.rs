//! Google SDK 로그인 HTTP 계약

use serde::{Deserialize, Serialize};
use crate::domain::models::oauth::google_oauth_model::{IdentityClaims, UserInfo};

/// `callback-sdk` 쿼리 파라미터
///
/// Google이 돌려주는 값이 상황마다 달라 세 필드 모두 선택입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub state: Option<String>,
}

/// 토큰 엔드포인트 원본 응답
///
/// 필요한 두 토큰만 읽습니다. 둘 중 하나라도 없으면 교환 실패로 봅니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleTokenResponse {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
}

/// 로그인 성공 응답
#[derive(Debug, Serialize)]
pub struct GoogleLoginResponse {
    pub id_token_decoded: IdentityClaims,
    pub user_info: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_all_optional() {
        let query: GoogleCallbackQuery = serde_json::from_str("{}").unwrap();

        assert!(query.code.is_none());
        assert!(query.error.is_none());
        assert!(query.state.is_none());
    }

    #[test]
    fn test_token_response_ignores_extra_fields() {
        let response: GoogleTokenResponse = serde_json::from_str(
            r#"{"access_token": "ya29", "expires_in": 3599, "token_type": "Bearer"}"#,
        )
        .unwrap();

        assert_eq!(response.access_token.as_deref(), Some("ya29"));
        assert!(response.id_token.is_none());
    }
}
