//! 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 조회 전용 접근을 제공합니다.
//! 사용자 생성/수정은 관리 도구의 몫이며 이 서비스는 하지 않습니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::BaseUser,
    errors::{AppError, AppResult},
};

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<BaseUser> {
        self.db.collection::<BaseUser>(Self::COLLECTION)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<BaseUser>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<BaseUser>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError(format!("Invalid user id: {}", id)))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터 문서와 일치하는 사용자를 이메일 순으로 반환합니다.
    pub async fn find_filtered(&self, filter: Document) -> AppResult<Vec<BaseUser>> {
        debug!("users filter: {}", filter);

        let cursor = self.collection()
            .find(filter)
            .sort(doc! { "email": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
