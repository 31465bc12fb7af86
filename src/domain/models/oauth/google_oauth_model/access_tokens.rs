//! Google 토큰 교환 결과와 ID 토큰 디코딩
//!
//! ## 보안 주의
//!
//! [`GoogleAccessTokens::decode_id_token`]은 서명을 **검증하지 않습니다**.
//! 토큰은 Google 토큰 엔드포인트와의 TLS 통신으로 직접 받은 값이라는 전제에 기대고 있으며,
//! 다른 경로로 전달된 ID 토큰을 신원 증명으로 사용해서는 안 됩니다.
//! 서명 검증이 필요하면 Google JWKS(`https://www.googleapis.com/oauth2/v3/certs`)로
//! RS256 검증을 추가해야 합니다.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};
use crate::errors::{AppError, AppResult};

/// ID 토큰 payload 클레임 (서명 미검증)
pub type IdentityClaims = Map<String, Value>;

/// 프로필 엔드포인트 응답
pub type UserInfo = Map<String, Value>;

/// 한 번의 토큰 교환으로 얻은 토큰 쌍
///
/// 토큰 교환 응답을 그대로 담으며, 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleAccessTokens {
    pub id_token: String,
    pub access_token: String,
}

impl GoogleAccessTokens {
    /// ID 토큰의 payload를 서명 검증 없이 디코딩합니다.
    ///
    /// `header.payload.signature` 세 구간 구조와 header/payload가 base64url JSON 객체인지만
    /// 확인합니다. 서명 구간은 비어 있어도 되고 내용이 무엇이든 무시됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 구간 수가 맞지 않거나 base64/JSON 디코딩 실패
    pub fn decode_id_token(&self) -> AppResult<IdentityClaims> {
        let mut segments = self.id_token.split('.');

        let (Some(header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AppError::ValidationError(
                "Identity token must consist of three segments".to_string(),
            ));
        };

        decode_segment(header, "header")?;
        decode_segment(payload, "payload")
    }
}

fn decode_segment(segment: &str, name: &str) -> AppResult<Map<String, Value>> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| AppError::ValidationError(format!("Invalid identity token {}: {}", name, e)))?;

    serde_json::from_slice::<Map<String, Value>>(&bytes)
        .map_err(|e| AppError::ValidationError(format!("Invalid identity token {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segment(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).unwrap())
    }

    fn tokens_with_id_token(id_token: String) -> GoogleAccessTokens {
        GoogleAccessTokens {
            id_token,
            access_token: "ya29.access".to_string(),
        }
    }

    #[test]
    fn test_forged_token_decodes_without_signature_check() {
        // 서명 검증을 하지 않는다는 사실 자체를 고정하는 회귀 테스트
        let header = segment(&json!({"alg": "RS256", "kid": "forged", "typ": "JWT"}));
        let payload = segment(&json!({"email": "victim@example.com", "sub": "1"}));
        let tokens = tokens_with_id_token(format!("{}.{}.bm90LWEtc2lnbmF0dXJl", header, payload));

        let claims = tokens.decode_id_token().unwrap();

        assert_eq!(claims["email"], "victim@example.com");
        assert_eq!(claims["sub"], "1");
    }

    #[test]
    fn test_unsigned_token_with_alg_none_decodes() {
        let header = segment(&json!({"alg": "none"}));
        let payload = segment(&json!({"email": "user@example.com", "email_verified": true}));
        let tokens = tokens_with_id_token(format!("{}.{}.", header, payload));

        let claims = tokens.decode_id_token().unwrap();

        assert_eq!(claims["email_verified"], true);
    }

    #[test]
    fn test_padded_segments_are_accepted() {
        let header = format!("{}==", segment(&json!({"alg": "HS256"})));
        let payload = segment(&json!({"aud": "client"}));
        let tokens = tokens_with_id_token(format!("{}.{}.sig", header, payload));

        assert_eq!(tokens.decode_id_token().unwrap()["aud"], "client");
    }

    #[test]
    fn test_wrong_segment_count_is_validation_error() {
        for token in ["", "only-one", "two.segments", "a.b.c.d"] {
            let result = tokens_with_id_token(token.to_string()).decode_id_token();
            assert!(matches!(result, Err(AppError::ValidationError(_))), "token: {}", token);
        }
    }

    #[test]
    fn test_payload_must_be_json_object() {
        let header = segment(&json!({"alg": "RS256"}));
        let payload = segment(&json!(["not", "an", "object"]));
        let tokens = tokens_with_id_token(format!("{}.{}.sig", header, payload));

        assert!(matches!(tokens.decode_id_token(), Err(AppError::ValidationError(_))));
    }
}
