//! 기본 제공 `session` 컨슈머
//!
//! | handler | 응답 |
//! |---------|------|
//! | `ping` | `{"message": "pong"}` |
//! | `echo` | 받은 메시지 그대로 |
//! | `whoami` | `{"user": "<email 또는 None>"}` |

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use crate::consumers::consumer::{Consumer, ConsumerContext, MessageHandler};
use crate::errors::AppResult;

pub struct PingHandler;

#[async_trait]
impl MessageHandler for PingHandler {
    async fn handle(&self, _content: &Map<String, Value>, _ctx: &ConsumerContext) -> AppResult<Value> {
        Ok(json!({ "message": "pong" }))
    }
}

pub struct EchoHandler;

#[async_trait]
impl MessageHandler for EchoHandler {
    async fn handle(&self, content: &Map<String, Value>, _ctx: &ConsumerContext) -> AppResult<Value> {
        Ok(Value::Object(content.clone()))
    }
}

pub struct WhoAmIHandler;

#[async_trait]
impl MessageHandler for WhoAmIHandler {
    async fn handle(&self, _content: &Map<String, Value>, ctx: &ConsumerContext) -> AppResult<Value> {
        Ok(json!({ "user": ctx.user_display() }))
    }
}

/// `session` 컨슈머를 만듭니다.
pub fn session_consumer(auth_required: bool) -> Consumer {
    Consumer::new("session")
        .require_auth(auth_required)
        .route("ping", PingHandler)
        .route("echo", EchoHandler)
        .route("whoami", WhoAmIHandler)
}
