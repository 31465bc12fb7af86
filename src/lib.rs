//! Styleguide 백엔드
//!
//! Actix-web 기반의 API 서버로, Google OAuth2 SDK 로그인 플로우와
//! JSON 메시지 라우팅을 하는 WebSocket 컨슈머를 제공합니다.
//!
//! # Features
//!
//! - **Google 로그인**: Authorization Code 플로우, state 쿠키 CSRF 검사
//! - **세션 토큰**: HS256 JWT를 HttpOnly 쿠키 또는 Bearer 헤더로 전달
//! - **WebSocket 컨슈머**: `handler` 필드 기반 메시지 라우팅
//! - **사용자 조회**: `id`, `email`, `is_admin` 필터
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐
//! │   HTTP Routes   │   │  /ws Consumers  │
//! └─────────────────┘   └─────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │    Handlers     │   │ Message Router  │
//! └─────────────────┘   └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인 플로우, 세션 토큰, 사용자 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod consumers;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
