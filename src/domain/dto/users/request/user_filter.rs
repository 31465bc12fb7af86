//! 사용자 목록 조회 필터
//!
//! 조회 가능한 필드는 [`BaseUserFilter::FIELDS`] 세 개뿐입니다.
//! 그 외 쿼리 키는 역직렬화 단계에서 무시됩니다.

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Deserialize;
use validator::Validate;
use crate::errors::{AppError, AppResult};

/// `GET /api/users` 쿼리 필터
///
/// 모든 조건은 완전 일치이며, 지정된 조건끼리는 AND로 결합됩니다.
///
/// ```text
/// /api/users?email=a@example.com&is_admin=true
///   → { "email": "a@example.com", "is_admin": true }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BaseUserFilter {
    /// 사용자 ID (ObjectId hex)
    pub id: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    pub is_admin: Option<bool>,
}

impl BaseUserFilter {
    /// 필터로 조회 가능한 필드 목록
    pub const FIELDS: [&'static str; 3] = ["id", "email", "is_admin"];

    /// MongoDB 필터 문서로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 형식 오류 또는 ObjectId 파싱 실패
    pub fn to_document(&self) -> AppResult<Document> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut filter = Document::new();

        if let Some(id) = &self.id {
            let object_id = ObjectId::parse_str(id)
                .map_err(|_| AppError::ValidationError(format!("Invalid user id: {}", id)))?;
            filter.insert("_id", object_id);
        }

        if let Some(email) = &self.email {
            filter.insert("email", email.as_str());
        }

        if let Some(is_admin) = self.is_admin {
            filter.insert("is_admin", is_admin);
        }

        Ok(filter)
    }
}
