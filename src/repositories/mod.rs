//! # Repositories Module
//!
//! MongoDB 컬렉션 접근 계층입니다. 서비스 계층만 이 모듈을 사용합니다.

pub mod users;
