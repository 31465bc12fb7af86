//! Google SDK 로그인 클라이언트 자격 증명

use crate::config::GoogleOAuthConfig;
use crate::errors::{AppError, AppResult};

/// Google OAuth 클라이언트 자격 증명
///
/// 프로세스 기동 시 한 번 만들어지고 이후 변경되지 않습니다.
/// 세 필드 모두 비어 있지 않아야 하며, 검증은 생성 시점에 끝납니다.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleSdkLoginCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub project_id: String,
}

impl GoogleSdkLoginCredentials {
    /// 자격 증명을 검증하며 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 어느 한 필드라도 비어 있는 경우.
    ///   메시지는 누락된 환경 변수 이름을 포함합니다.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        project_id: impl Into<String>,
    ) -> AppResult<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        let project_id = project_id.into();

        for (value, var) in [
            (&client_id, GoogleOAuthConfig::CLIENT_ID_VAR),
            (&client_secret, GoogleOAuthConfig::CLIENT_SECRET_VAR),
            (&project_id, GoogleOAuthConfig::PROJECT_ID_VAR),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ConfigurationError(format!("{} missing in env.", var)));
            }
        }

        Ok(Self {
            client_id,
            client_secret,
            project_id,
        })
    }

    /// 환경 변수에서 자격 증명을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::new(
            GoogleOAuthConfig::client_id(),
            GoogleOAuthConfig::client_secret(),
            GoogleOAuthConfig::project_id(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present() {
        let credentials = GoogleSdkLoginCredentials::new("id", "secret", "project").unwrap();

        assert_eq!(credentials.client_id, "id");
        assert_eq!(credentials.client_secret, "secret");
        assert_eq!(credentials.project_id, "project");
    }

    #[test]
    fn test_each_missing_field_is_configuration_error() {
        let cases = [
            (("", "secret", "project"), "GOOGLE_OAUTH2_CLIENT_ID missing in env."),
            (("id", "", "project"), "GOOGLE_OAUTH2_CLIENT_SECRET missing in env."),
            (("id", "secret", ""), "GOOGLE_OAUTH2_PROJECT_ID missing in env."),
        ];

        for ((id, secret, project), expected) in cases {
            match GoogleSdkLoginCredentials::new(id, secret, project) {
                Err(AppError::ConfigurationError(msg)) => assert_eq!(msg, expected),
                other => panic!("Expected ConfigurationError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        assert!(matches!(
            GoogleSdkLoginCredentials::new("  ", "secret", "project"),
            Err(AppError::ConfigurationError(_))
        ));
    }
}
