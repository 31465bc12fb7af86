//! 사용자 조회 서비스

use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use crate::{
    domain::{
        dto::users::{request::BaseUserFilter, response::UserListResponse},
        entities::users::BaseUser,
    },
    errors::{AppError, AppResult},
    repositories::users::UserRepository,
};

/// 로그인 콜백이 사용하는 사용자 조회
///
/// `ServiceLocator`에는 `dyn LoginUserLookup`으로 등록됩니다.
#[async_trait]
pub trait LoginUserLookup: Send + Sync {
    /// 로그인 대상 사용자를 이메일로 찾습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음 ([`email_not_found`])
    async fn get_by_email(&self, email: &str) -> AppResult<BaseUser>;
}

pub fn email_not_found(email: &str) -> AppError {
    AppError::NotFound(format!("User with email {} is not found.", email))
}

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 필터 조건으로 사용자 목록을 조회합니다.
    pub async fn list_users(&self, filter: &BaseUserFilter) -> AppResult<UserListResponse> {
        let document = filter.to_document()?;
        let users = self.user_repo.find_filtered(document).await?;

        Ok(UserListResponse::from(users))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<BaseUser> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} is not found.", id)))
    }
}

#[async_trait]
impl LoginUserLookup for UserService {
    async fn get_by_email(&self, email: &str) -> AppResult<BaseUser> {
        match self.user_repo.find_by_email(email).await? {
            Some(user) => {
                info!("사용자 로그인: {}", user);
                Ok(user)
            },
            None => Err(email_not_found(email)),
        }
    }
}
