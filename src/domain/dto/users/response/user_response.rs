use serde::{Deserialize, Serialize};
use crate::domain::entities::users::BaseUser;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BaseUser> for UserResponse {
    fn from(user: BaseUser) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            created_at: user.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: user.updated_at.try_to_rfc3339_string().unwrap_or_default(),
            email: user.email,
            is_admin: user.is_admin,
            is_active: user.is_active,
        }
    }
}

/// 사용자 목록 응답
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub count: usize,
    pub users: Vec<UserResponse>,
}

impl From<Vec<BaseUser>> for UserListResponse {
    fn from(users: Vec<BaseUser>) -> Self {
        let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Self {
            count: users.len(),
            users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_from_entity() {
        let mut user = BaseUser::new("user@example.com".to_string(), true);
        let id = ObjectId::new();
        user.id = Some(id);

        let response = UserResponse::from(user);

        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.email, "user@example.com");
        assert!(response.is_admin);
        assert!(!response.created_at.is_empty());
    }

    #[test]
    fn test_list_counts_users() {
        let users = vec![
            BaseUser::new("a@example.com".to_string(), false),
            BaseUser::new("b@example.com".to_string(), false),
        ];

        let response = UserListResponse::from(users);

        assert_eq!(response.count, 2);
        assert_eq!(response.users[1].email, "b@example.com");
    }
}
