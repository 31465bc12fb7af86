//! # Database Module
//!
//! MongoDB 연결을 관리합니다. 접속 정보는 [`DatabaseConfig`]에서 읽습니다.
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="styleguide_dev"
//! ```
//!
//! 연결 직후 `ping` 명령으로 접속 가능 여부를 확인하므로,
//! MongoDB가 떠 있지 않으면 서버 기동이 실패합니다.

use mongodb::{Client, Collection, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 클라이언트와 기본 데이터베이스 이름
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 연결을 만들고 `ping`으로 확인합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await
    }

    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Invalid MongoDB URI: {}", e)))?;

        client_options.app_name = Some("styleguide_backend".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping failed: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }
}
