//! # Services Module
//!
//! 핸들러와 리포지토리 사이의 비즈니스 계층입니다.
//!
//! - [`auth`] - 세션 토큰, Google SDK 로그인 플로우
//! - [`users`] - 사용자 조회

pub mod users;
pub mod auth;
