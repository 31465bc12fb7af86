//! # Domain Models Module
//!
//! 영속되지 않는 도메인 값 객체들입니다.
//! 컬렉션에 저장되는 객체는 [`crate::domain::entities`]에 있습니다.
//!
//! ```text
//! models/
//! ├── auth/    ← 요청 단위 인증 사용자, 인증 모드
//! ├── token/   ← 세션 JWT 클레임
//! └── oauth/   ← Google SDK 로그인 자격 증명과 토큰
//! ```

pub mod auth;
pub mod token;
pub mod oauth;
