//! 에러 응답 형식 확인용 핸들러 (`/api/errors/{kind}`)
//!
//! 각 `AppError` 변형이 어떤 상태 코드와 본문으로 나가는지 확인할 수 있습니다.

use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;

/// `kind`에 해당하는 에러를 그대로 반환합니다.
#[get("/{kind}")]
pub async fn raise_error(kind: web::Path<String>) -> Result<HttpResponse, AppError> {
    Err(error_for(&kind))
}

pub fn error_for(kind: &str) -> AppError {
    match kind {
        "configuration" => AppError::ConfigurationError("Example configuration error.".to_string()),
        "validation" => AppError::ValidationError("Example validation error.".to_string()),
        "application" => AppError::ApplicationError("Example application error.".to_string()),
        "database" => AppError::DatabaseError("Example database error.".to_string()),
        "authentication" => AppError::AuthenticationError("Example authentication error.".to_string()),
        "authorization" => AppError::AuthorizationError("Example authorization error.".to_string()),
        "external" => AppError::ExternalServiceError("Example external service error.".to_string()),
        "internal" => AppError::InternalError("Example internal error.".to_string()),
        other => AppError::NotFound(format!("Unknown error kind: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_status_per_kind() {
        let app = test::init_service(App::new().service(raise_error)).await;

        let cases = [
            ("configuration", StatusCode::INTERNAL_SERVER_ERROR),
            ("validation", StatusCode::BAD_REQUEST),
            ("application", StatusCode::BAD_REQUEST),
            ("database", StatusCode::INTERNAL_SERVER_ERROR),
            ("authentication", StatusCode::UNAUTHORIZED),
            ("authorization", StatusCode::FORBIDDEN),
            ("external", StatusCode::BAD_GATEWAY),
            ("internal", StatusCode::INTERNAL_SERVER_ERROR),
            ("teapot", StatusCode::NOT_FOUND),
        ];

        for (kind, status) in cases {
            let req = test::TestRequest::get().uri(&format!("/{}", kind)).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status, "kind: {}", kind);
        }
    }

    #[actix_web::test]
    async fn test_body_shape() {
        let app = test::init_service(App::new().service(raise_error)).await;

        let req = test::TestRequest::get().uri("/validation").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"error": "Example validation error."}));
    }
}
