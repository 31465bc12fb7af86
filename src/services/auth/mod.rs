//! 인증 서비스: 세션 토큰과 Google SDK 로그인 플로우

pub mod token_service;
pub mod google_sdk_login_service;

pub use token_service::TokenService;
pub use google_sdk_login_service::{
    GoogleOAuthEndpoints, GoogleSdkLoginFlowService, GOOGLE_SDK_CALLBACK_PATH,
};
