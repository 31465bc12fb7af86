//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, 외부 URL, Rate Limiting 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로부터 현재 환경을 결정합니다. 기본값은 Production.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// HTTPS 전용 쿠키를 사용할 환경인지 여부
    pub fn secure_cookies(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 프론트엔드/백엔드 기본 URL
///
/// 백엔드 URL은 OAuth redirect URI 계산에, 프론트엔드 URL은 CORS 허용 오리진에 쓰입니다.
pub struct UrlConfig;

impl UrlConfig {
    pub fn base_backend_url() -> String {
        env::var("BASE_BACKEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
    }

    pub fn base_frontend_url() -> String {
        env::var("BASE_FRONTEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "styleguide_dev".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}
