//! # Google SDK Login Flow Service
//!
//! Google OAuth 2.0 Authorization Code 플로우의 서버 측 절차를 담당합니다.
//!
//! ```text
//! 1. get_authorization_url()  → (url, state)        브라우저를 Google로 보냄
//! 2. get_tokens(code, state)  → GoogleAccessTokens   code 교환 (POST token endpoint)
//! 3. decode_id_token()        → IdentityClaims       서명 미검증 디코딩
//! 4. get_user_info(&tokens)   → UserInfo             프로필 조회
//! ```
//!
//! 재시도는 어디에서도 하지 않습니다. 실패는 그대로 호출자에게 전달됩니다.
//!
//! ## 에러 매핑
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 자격 증명 누락 | `ConfigurationError` (생성 시점) |
//! | Google 접속 실패, 토큰 엔드포인트 non-2xx | `ExternalServiceError` |
//! | 토큰 응답에 토큰이 없음 | `ValidationError` |
//! | 프로필 엔드포인트 non-2xx | `ApplicationError` |

use log::{debug, info, warn};
use reqwest::Client;
use uuid::Uuid;
use crate::{
    config::{
        GOOGLE_ACCESS_TOKEN_OBTAIN_URL, GOOGLE_AUTH_URL, GOOGLE_SCOPES, GOOGLE_USER_INFO_URL,
        UrlConfig,
    },
    domain::dto::oauth::GoogleTokenResponse,
    domain::models::oauth::google_oauth_model::{
        GoogleAccessTokens, GoogleSdkLoginCredentials, UserInfo,
    },
    errors::{AppError, AppResult},
};

/// Google 콜백 경로 (`BASE_BACKEND_URL` 뒤에 붙음)
pub const GOOGLE_SDK_CALLBACK_PATH: &str = "/api/google-oauth2/login/sdk/callback";

/// 플로우가 사용하는 Google 엔드포인트 묶음
///
/// 기본값은 `config::auth_config`의 상수이며, 테스트에서는 mock 서버 주소로 바꿉니다.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleOAuthEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub user_info_url: String,
}

impl Default for GoogleOAuthEndpoints {
    fn default() -> Self {
        Self {
            auth_url: GOOGLE_AUTH_URL.to_string(),
            token_url: GOOGLE_ACCESS_TOKEN_OBTAIN_URL.to_string(),
            user_info_url: GOOGLE_USER_INFO_URL.to_string(),
        }
    }
}

pub struct GoogleSdkLoginFlowService {
    credentials: GoogleSdkLoginCredentials,
    redirect_uri: String,
    endpoints: GoogleOAuthEndpoints,
    http: Client,
}

impl GoogleSdkLoginFlowService {
    pub fn new(credentials: GoogleSdkLoginCredentials, redirect_uri: impl Into<String>) -> Self {
        info!("🔐 Google SDK 로그인 플로우 초기화 (project: {})", credentials.project_id);

        Self {
            credentials,
            redirect_uri: redirect_uri.into(),
            endpoints: GoogleOAuthEndpoints::default(),
            http: Client::new(),
        }
    }

    /// 환경 변수로 생성합니다. 자격 증명이 하나라도 없으면 즉시 실패합니다.
    pub fn from_env() -> AppResult<Self> {
        let credentials = GoogleSdkLoginCredentials::from_env()?;
        let redirect_uri = format!("{}{}", UrlConfig::base_backend_url(), GOOGLE_SDK_CALLBACK_PATH);

        Ok(Self::new(credentials, redirect_uri))
    }

    pub fn with_endpoints(mut self, endpoints: GoogleOAuthEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Google 동의 화면 URL과 CSRF state를 만듭니다.
    ///
    /// state는 호출마다 새로 생성되며, 호출자가 보관했다가 콜백에서 비교해야 합니다.
    pub fn get_authorization_url(&self) -> (String, String) {
        let state = Uuid::new_v4().simple().to_string();
        let scope = GOOGLE_SCOPES.join(" ");

        let params = [
            ("response_type", "code"),
            ("client_id", self.credentials.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", state.as_str()),
            ("access_type", "offline"),
            ("include_granted_scopes", "true"),
            ("prompt", "select_account"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let authorization_url = format!("{}?{}", self.endpoints.auth_url, query_string);

        (authorization_url, state)
    }

    /// Authorization code를 토큰 쌍으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 접속 실패, non-2xx, 해석 불가능한 응답
    /// * `AppError::ValidationError` - 응답에 `id_token`/`access_token`이 없음
    pub async fn get_tokens(&self, code: &str, state: &str) -> AppResult<GoogleAccessTokens> {
        debug!("Google 토큰 교환 요청 (state: {})", state);

        let params = [
            ("code", code),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.endpoints.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Google 토큰 교환 실패 ({}): {}", status, error_text);
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}", error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 수신 실패: {}", e)))?;

        let token_response = if body.trim().is_empty() {
            GoogleTokenResponse::default()
        } else {
            serde_json::from_str::<GoogleTokenResponse>(&body)
                .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))?
        };

        match token_response {
            GoogleTokenResponse {
                id_token: Some(id_token),
                access_token: Some(access_token),
            } if !id_token.is_empty() && !access_token.is_empty() => {
                Ok(GoogleAccessTokens { id_token, access_token })
            },
            _ => Err(AppError::ValidationError(
                "Failed to obtain access credentials from Google".to_string(),
            )),
        }
    }

    /// Access token으로 Google 프로필을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ApplicationError` - 프로필 엔드포인트가 non-2xx 응답
    /// * `AppError::ExternalServiceError` - 접속 실패 또는 JSON 객체가 아닌 응답
    pub async fn get_user_info(&self, tokens: &GoogleAccessTokens) -> AppResult<UserInfo> {
        let response = self.http
            .get(&self.endpoints.user_info_url)
            .query(&[("access_token", tokens.access_token.as_str())])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            warn!("Google 사용자 정보 조회 실패: {}", response.status());
            return Err(AppError::ApplicationError(
                "Failed to obtain user info from Google.".to_string(),
            ));
        }

        response
            .json::<UserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use serde_json::json;
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wiremock::matchers::{body_string_contains, method, path, query_param};

    fn credentials() -> GoogleSdkLoginCredentials {
        GoogleSdkLoginCredentials::new("client-id", "client-secret", "project-id").unwrap()
    }

    fn service() -> GoogleSdkLoginFlowService {
        GoogleSdkLoginFlowService::new(
            credentials(),
            format!("http://localhost:8080{}", GOOGLE_SDK_CALLBACK_PATH),
        )
    }

    fn service_for(server: &MockServer) -> GoogleSdkLoginFlowService {
        service().with_endpoints(GoogleOAuthEndpoints {
            auth_url: format!("{}/o/oauth2/auth", server.uri()),
            token_url: format!("{}/token", server.uri()),
            user_info_url: format!("{}/oauth2/v3/userinfo", server.uri()),
        })
    }

    fn id_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        format!("{}.{}.c2lnbmF0dXJl", header, payload)
    }

    #[test]
    fn test_authorization_url_parameters() {
        let service = service();

        let (url, state) = service.get_authorization_url();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fapi%2Fgoogle-oauth2%2Flogin%2Fsdk%2Fcallback"
        ));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("include_granted_scopes=true"));
        assert!(url.contains("prompt=select_account"));
        assert!(url.contains("openid"));
        assert!(url.contains("userinfo.email"));
        assert!(url.contains("userinfo.profile"));
        assert!(url.contains(&format!("state={}", state)));
    }

    #[test]
    fn test_state_is_fresh_per_call() {
        let service = service();

        let (_, first) = service.get_authorization_url();
        let (_, second) = service.get_authorization_url();

        assert_eq!(first.len(), 32);
        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn test_get_tokens_success() {
        let server = MockServer::start().await;
        let token = id_token(json!({"email": "user@example.com"}));

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=auth-code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.token",
                "id_token": token,
                "expires_in": 3599,
                "token_type": "Bearer",
            })))
            .mount(&server)
            .await;

        let tokens = service_for(&server).get_tokens("auth-code", "state").await.unwrap();

        assert_eq!(tokens.access_token, "ya29.token");
        assert_eq!(tokens.decode_id_token().unwrap()["email"], "user@example.com");
    }

    #[actix_web::test]
    async fn test_get_tokens_without_payload_is_validation_error() {
        for body in [json!({}), json!({"access_token": "only-access"})] {
            let server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/token"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;

            match service_for(&server).get_tokens("code", "state").await {
                Err(AppError::ValidationError(msg)) => {
                    assert_eq!(msg, "Failed to obtain access credentials from Google")
                },
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }
    }

    #[actix_web::test]
    async fn test_get_tokens_empty_body_is_validation_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(matches!(
            service_for(&server).get_tokens("code", "state").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_tokens_rejected_code() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})))
            .mount(&server)
            .await;

        assert!(matches!(
            service_for(&server).get_tokens("used-code", "state").await,
            Err(AppError::ExternalServiceError(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_user_info_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth2/v3/userinfo"))
            .and(query_param("access_token", "ya29.token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sub": "1234",
                "email": "user@example.com",
                "name": "User",
            })))
            .mount(&server)
            .await;

        let tokens = GoogleAccessTokens {
            id_token: id_token(json!({})),
            access_token: "ya29.token".to_string(),
        };

        let info = service_for(&server).get_user_info(&tokens).await.unwrap();

        assert_eq!(info["email"], "user@example.com");
        assert_eq!(info["name"], "User");
    }

    #[actix_web::test]
    async fn test_get_user_info_non_success_is_application_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth2/v3/userinfo"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let tokens = GoogleAccessTokens {
            id_token: id_token(json!({})),
            access_token: "expired".to_string(),
        };

        match service_for(&server).get_user_info(&tokens).await {
            Err(AppError::ApplicationError(msg)) => {
                assert_eq!(msg, "Failed to obtain user info from Google.")
            },
            other => panic!("Expected ApplicationError, got {:?}", other),
        }
    }
}
