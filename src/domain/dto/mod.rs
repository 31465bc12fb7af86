//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 오가는 요청/응답 객체입니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # BaseUserFilter (목록 조회 필터)
//! │   └── response/   # UserResponse, UserListResponse
//! └── oauth/          # Google 콜백 쿼리, 토큰 응답, 로그인 응답
//! ```

pub mod users;
pub mod oauth;

pub use users::*;
pub use oauth::*;
