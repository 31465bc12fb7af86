//! # Message Router
//!
//! WebSocket으로 들어온 JSON 메시지의 `handler` 필드를 보고 등록된 핸들러로 보냅니다.
//!
//! ```text
//! {"handler": "echo", "message": "hi"}
//!        │
//!        ▼  routes["echo"]
//!  EchoHandler::handle(content, ctx) ──► 응답 JSON 그대로 전송
//!
//! {"handler": "nope"} ──► {"message": "No route for nope"}  (연결 유지)
//! ```
//!
//! 라우팅 테이블은 `Consumer` 생성 시 한 번 구성되고 이후 읽기만 합니다.
//! 핸들러가 반환한 에러는 여기서 잡지 않고 전송 루프로 올려 보냅니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use serde_json::{json, Map, Value};
use uuid::Uuid;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};

/// 연결 단위 컨텍스트
///
/// 한 WebSocket 연결 동안 변하지 않습니다.
#[derive(Debug, Clone)]
pub struct ConsumerContext {
    pub connection_id: Uuid,
    pub user: Option<AuthenticatedUser>,
}

impl ConsumerContext {
    pub fn new(user: Option<AuthenticatedUser>) -> Self {
        Self {
            connection_id: Uuid::new_v4(),
            user,
        }
    }

    /// 사용자 표시 문자열. 미인증이면 `"None"`.
    pub fn user_display(&self) -> String {
        self.user
            .as_ref()
            .map(|user| user.to_string())
            .unwrap_or_else(|| "None".to_string())
    }
}

/// 메시지 핸들러
///
/// 반환값은 가공 없이 클라이언트로 전송됩니다.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, content: &Map<String, Value>, ctx: &ConsumerContext) -> AppResult<Value>;
}

/// 연결 수립 결과
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectDecision {
    /// 인사 메시지를 보내고 연결 유지
    Accept(Value),
    /// 거절 메시지를 보낸 뒤 연결 종료
    Reject(Value),
}

pub struct Consumer {
    name: String,
    auth_required: bool,
    routes: HashMap<String, Arc<dyn MessageHandler>>,
}

impl Consumer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auth_required: false,
            routes: HashMap::new(),
        }
    }

    pub fn require_auth(mut self, required: bool) -> Self {
        self.auth_required = required;
        self
    }

    /// 핸들러를 등록합니다. 같은 이름이 있으면 교체합니다.
    pub fn route(mut self, name: impl Into<String>, handler: impl MessageHandler + 'static) -> Self {
        self.routes.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn auth_required(&self) -> bool {
        self.auth_required
    }

    /// 연결 수립 시 인증 요구 여부를 확인합니다.
    pub fn connect(&self, ctx: &ConsumerContext) -> ConnectDecision {
        if self.auth_required && ctx.user.is_none() {
            debug!("[{}] {} rejected: unauthenticated", self.name, ctx.connection_id);
            return ConnectDecision::Reject(json!({ "message": "unauthorized" }));
        }

        ConnectDecision::Accept(json!({
            "message": "connected",
            "user": ctx.user_display(),
        }))
    }

    /// 텍스트 프레임을 JSON 객체로 해석한 뒤 [`Consumer::dispatch`]로 넘깁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - JSON이 아니거나 객체가 아닌 메시지
    pub async fn receive_text(&self, text: &str, ctx: &ConsumerContext) -> AppResult<Value> {
        let content = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(content)) => content,
            Ok(_) => {
                return Err(AppError::ValidationError(
                    "WebSocket message must be a JSON object".to_string(),
                ));
            },
            Err(e) => {
                return Err(AppError::ValidationError(format!("Invalid JSON message: {}", e)));
            },
        };

        self.dispatch(&content, ctx).await
    }

    /// 메시지를 이름에 맞는 핸들러로 보냅니다.
    ///
    /// `handler`가 없으면 빈 이름으로 찾습니다. 문자열이 아닌 값은 어떤 라우트와도
    /// 맞지 않으며, 응답에는 `None`, `True`, `False`, 또는 JSON 텍스트로 표시됩니다.
    pub async fn dispatch(&self, content: &Map<String, Value>, ctx: &ConsumerContext) -> AppResult<Value> {
        debug!("[{}] {} ← {}", self.name, ctx.connection_id, Value::Object(content.clone()));

        let handler = content.get("handler");
        let route = match handler {
            None => self.routes.get(""),
            Some(Value::String(name)) => self.routes.get(name.as_str()),
            Some(_) => None,
        };

        match route {
            Some(route) => route.handle(content, ctx).await,
            None => Ok(json!({ "message": format!("No route for {}", display_handler(handler)) })),
        }
    }
}

fn display_handler(handler: Option<&Value>) -> String {
    match handler {
        None => String::new(),
        Some(Value::String(name)) => name.clone(),
        Some(Value::Null) => "None".to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}

impl fmt::Debug for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<&String> = self.routes.keys().collect();
        routes.sort();

        f.debug_struct("Consumer")
            .field("name", &self.name)
            .field("auth_required", &self.auth_required)
            .field("routes", &routes)
            .finish()
    }
}
