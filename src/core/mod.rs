//! # Core Module
//!
//! 애플리케이션 전역 인프라를 제공합니다.
//!
//! - [`registry`] - 타입 기반 싱글톤 레지스트리 (`ServiceLocator`)

pub mod registry;

pub use registry::*;
