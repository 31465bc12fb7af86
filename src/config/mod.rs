//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env.dev` / `.env.prod` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, URL, Rate Limiting 설정
//! - [`auth_config`] - Google OAuth, JWT 세션 토큰 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수 (없으면 기동 실패)
//! export GOOGLE_OAUTH2_CLIENT_ID="your-client-id"
//! export GOOGLE_OAUTH2_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_OAUTH2_PROJECT_ID="your-project-id"
//!
//! # redirect URI / CORS
//! export BASE_BACKEND_URL="http://localhost:8080"
//! export BASE_FRONTEND_URL="http://localhost:3000"
//!
//! # 선택
//! export JWT_SECRET="your-super-secret-key"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="styleguide_dev"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
