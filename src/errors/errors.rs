//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 `{"error": "..."}` 형태의
//! JSON 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | HTTP Status | 복구 |
//! |------|------|-------------|------|
//! | 설정 에러 | `ConfigurationError` | 500 | 불가 (기동 중단) |
//! | 검증 에러 | `ValidationError` | 400 | 호출자가 재시도 |
//! | 애플리케이션 에러 | `ApplicationError` | 400 | 호출자가 재시도 |
//! | 외부 서비스 에러 | `ExternalServiceError` | 502 | 호출자가 재시도 |
//!
//! 알 수 없는 WebSocket 핸들러 이름은 에러가 아니며 이 타입으로 표현하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require(value: &str) -> Result<(), AppError> {
//!     if value.is_empty() {
//!         return Err(AppError::ValidationError("value is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 설정값 누락 (500 Internal Server Error)
    ///
    /// 컴포넌트 생성 시점에 즉시 발생하며, 기동 과정이라면 프로세스를 중단시킵니다.
    #[error("{0}")]
    ConfigurationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 요청 단위의 비즈니스 실패 (400 Bad Request)
    #[error("{0}")]
    ApplicationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::ApplicationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기고, 응답 본문은 모든 변형이 동일한 형식을 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
