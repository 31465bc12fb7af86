//! # Middlewares Module
//!
//! - [`auth_middleware`] - 세션 토큰 인증 (필수/선택)

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
