//! Styleguide 백엔드 메인 애플리케이션
//!
//! Actix-web HTTP 서버를 구동하고 MongoDB, Google 로그인 플로우, 세션 토큰 서비스를 초기화합니다.
//! WebSocket 컨슈머는 `/ws` 아래에 마운트됩니다.

use std::process;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use log::{error, info};
use styleguide_backend::config::{RateLimitConfig, ServerConfig, UrlConfig};
use styleguide_backend::core::registry::ServiceLocator;
use styleguide_backend::db::Database;
use styleguide_backend::errors::AppResult;
use styleguide_backend::repositories::users::UserRepository;
use styleguide_backend::routes::configure_all_routes;
use styleguide_backend::services::auth::{GoogleSdkLoginFlowService, TokenService};
use styleguide_backend::services::users::{LoginUserLookup, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 파일을 먼저 읽어야 RUST_LOG가 로거에 반영됨
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(message) => info!("{}", message),
        Err(message) => error!("{}", message),
    }

    info!("🚀 Styleguide 백엔드 시작중...");

    if let Err(e) = initialize_services().await {
        error!("❌ 서비스 초기화 실패: {}", e);
        process::exit(1);
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// 서비스를 생성해 ServiceLocator에 등록합니다
///
/// Google 자격 증명이 비어 있으면 여기서 `ConfigurationError`로 실패하며,
/// 첫 로그인 요청까지 미루지 않습니다.
async fn initialize_services() -> AppResult<()> {
    let login_flow = GoogleSdkLoginFlowService::from_env()?;
    info!("🔗 Google redirect URI: {}", login_flow.redirect_uri());

    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::new().await?);

    let user_repo = Arc::new(UserRepository::new(database.clone()));
    user_repo.create_indexes().await?;

    ServiceLocator::set(database);
    let user_service = Arc::new(UserService::new(user_repo));
    ServiceLocator::set::<dyn LoginUserLookup>(user_service.clone());
    ServiceLocator::set(user_service);
    ServiceLocator::set(Arc::new(TokenService::from_env()));
    ServiceLocator::set(Arc::new(login_flow));

    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 WebSocket: ws://{}/ws/public, ws://{}/ws/private", bind_address, bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)",
        ))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거가 아직 없으므로 결과는 메시지로 돌려주고 `main`에서 기록합니다.
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => Ok(format!("Current profile: {}, .env.prod 파일 로드 됨", profile)),
            Err(e) => Err(format!("Current profile: {}, .env.prod 파일 로드 실패: {}", profile, e)),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => Ok(format!("Current profile: {}, .env.dev 파일 로드 됨", profile)),
            Err(e) => Err(format!("Current profile: {}, .env.dev 파일 로드 실패: {}", profile, e)),
        },
        _ => {
            dotenv().ok();
            Ok(format!("Current profile: {}, 기본 .env 파일 로드", profile))
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "info,actix_web=debug";

/// `RUST_LOG` 값, 없으면 기본 필터
fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// # WebSocket 수신 메시지까지 보기
/// RUST_LOG=info,styleguide_backend::consumers=debug cargo run
/// ```
fn init_logging() {
    env_logger::Builder::new().parse_filters(&log_filter()).init();
}

/// 프론트엔드 Origin에 대한 CORS 설정
///
/// `BASE_FRONTEND_URL`만 허용하며, 세션 쿠키 전달을 위해 자격 증명을 지원합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin(&UrlConfig::base_frontend_url())
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_comes_from_env_file() {
        let path = std::env::temp_dir().join(format!("styleguide-{}.env", uuid::Uuid::new_v4()));
        std::fs::write(&path, "RUST_LOG=styleguide_backend=trace\n").unwrap();

        // 이 바이너리의 유일한 테스트라 환경 변수를 건드려도 경합이 없음
        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(log_filter(), DEFAULT_LOG_FILTER);

        dotenv::from_filename(&path).unwrap();
        assert_eq!(log_filter(), "styleguide_backend=trace");

        std::fs::remove_file(path).ok();
    }
}
