//! BaseUser Entity
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티입니다.
//! 로그인 식별자는 이메일이며, 관리자 여부는 `is_admin` 플래그로 표현합니다.

use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 로그인 식별자 (유니크)
    pub email: String,

    pub is_admin: bool,

    pub is_active: bool,

    pub created_at: DateTime,

    pub updated_at: DateTime,
}

impl BaseUser {
    /// 저장 전의 새 사용자를 생성합니다. `id`는 저장 시 채워집니다.
    pub fn new(email: String, is_admin: bool) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            is_admin,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl fmt::Display for BaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}
