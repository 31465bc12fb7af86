//! WebSocket 업그레이드 핸들러 (`/ws/public`, `/ws/private`)
//!
//! 어느 컨슈머로 연결할지는 리소스에 붙은 `web::Data<Consumer>`가 정합니다.

use actix_web::{web, HttpRequest, HttpResponse};
use crate::consumers::{session, Consumer, ConsumerContext};
use crate::domain::models::auth::OptionalUser;
use crate::errors::AppError;

pub async fn connect(
    req: HttpRequest,
    body: web::Payload,
    consumer: web::Data<Consumer>,
    OptionalUser(user): OptionalUser,
) -> Result<HttpResponse, AppError> {
    let (response, ws_session, stream) = actix_ws::handle(&req, body)
        .map_err(|e| AppError::ValidationError(format!("WebSocket handshake failed: {}", e)))?;

    let ctx = ConsumerContext::new(user);
    actix_web::rt::spawn(session::run(consumer.into_inner(), ctx, ws_session, stream));

    Ok(response)
}
