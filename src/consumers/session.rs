//! # WebSocket Session Loop
//!
//! 연결 하나를 담당하는 전송 루프입니다. 메시지는 연결마다 한 번에 하나씩 처리됩니다.
//!
//! | 수신 프레임 | 동작 |
//! |-------------|------|
//! | Text | JSON 객체로 해석 후 dispatch, 응답 전송 |
//! | Ping | Pong |
//! | Close | 루프 종료 |
//! | Binary | `Unsupported`로 종료 |
//!
//! dispatch가 에러를 돌려주면 `Error` 코드와 메시지를 담아 연결을 닫습니다.

use std::sync::Arc;
use actix_ws::{AggregatedMessage, CloseCode, CloseReason, MessageStream, Session};
use futures_util::StreamExt;
use log::{debug, info, warn};
use crate::consumers::consumer::{ConnectDecision, Consumer, ConsumerContext};

/// 연결 수립부터 종료까지 세션을 구동합니다.
pub async fn run(consumer: Arc<Consumer>, ctx: ConsumerContext, mut session: Session, stream: MessageStream) {
    match consumer.connect(&ctx) {
        ConnectDecision::Reject(reply) => {
            let _ = session.text(reply.to_string()).await;
            let _ = session.close(Some(CloseCode::Policy.into())).await;
            return;
        },
        ConnectDecision::Accept(reply) => {
            if session.text(reply.to_string()).await.is_err() {
                return;
            }
        },
    }

    info!("🔌 [{}] {} connected ({})", consumer.name(), ctx.connection_id, ctx.user_display());

    let mut stream = stream.aggregate_continuations();

    let close_reason = loop {
        let Some(frame) = stream.next().await else {
            break None;
        };

        match frame {
            Ok(AggregatedMessage::Text(text)) => {
                match consumer.receive_text(&text, &ctx).await {
                    Ok(reply) => {
                        if session.text(reply.to_string()).await.is_err() {
                            return;
                        }
                    },
                    Err(e) => {
                        warn!("[{}] {} handler error: {}", consumer.name(), ctx.connection_id, e);
                        break Some(CloseReason {
                            code: CloseCode::Error,
                            description: Some(e.to_string()),
                        });
                    },
                }
            },
            Ok(AggregatedMessage::Ping(bytes)) => {
                if session.pong(&bytes).await.is_err() {
                    return;
                }
            },
            Ok(AggregatedMessage::Pong(_)) => {},
            Ok(AggregatedMessage::Binary(_)) => {
                break Some(CloseCode::Unsupported.into());
            },
            Ok(AggregatedMessage::Close(reason)) => {
                break reason;
            },
            Err(e) => {
                warn!("[{}] {} protocol error: {}", consumer.name(), ctx.connection_id, e);
                break Some(CloseCode::Protocol.into());
            },
        }
    };

    debug!("[{}] {} closing: {:?}", consumer.name(), ctx.connection_id, close_reason);
    let _ = session.close(close_reason).await;
}
