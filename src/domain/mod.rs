//! # Domain Layer Module
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB 영속 엔티티 (BaseUser)
//! ├── dto/        ← HTTP 요청/응답 객체
//! └── models/     ← 인증 사용자, 세션 클레임, Google OAuth 값 객체
//! ```
//!
//! 서비스와 핸들러는 이 모듈의 타입만 주고받습니다.

pub mod entities;
pub mod dto;
pub mod models;
