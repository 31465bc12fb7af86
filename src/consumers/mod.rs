//! # WebSocket Consumers
//!
//! - [`consumer`] - 메시지 라우터 (`handler` 이름 → 핸들러)
//! - [`session`] - actix-ws 위에서 도는 연결 단위 전송 루프
//! - [`handlers`] - 기본 `session` 컨슈머와 그 핸들러들
//!
//! `/ws/public`은 인증 없이, `/ws/private`는 인증된 연결만 받습니다.

pub mod consumer;
pub mod session;
pub mod handlers;

pub use consumer::{ConnectDecision, Consumer, ConsumerContext, MessageHandler};
pub use handlers::session_consumer;
