//! 사용자 조회 핸들러 (`/api/users`, 인증 필요)

use actix_web::{get, web, HttpResponse};
use crate::core::ServiceLocator;
use crate::domain::dto::users::{request::BaseUserFilter, response::UserResponse};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 필터 조건에 맞는 사용자 목록
///
/// `?id=`, `?email=`, `?is_admin=` 만 인식합니다.
#[get("")]
pub async fn list_users(
    filter: web::Query<BaseUserFilter>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<UserService>()?;
    let response = service.list_users(&filter).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<UserService>()?;
    let user = service.get_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
