use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::SendMessageRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::websocket;

/// 发送消息
///
/// 先落库，再尽力推送给在线的接收者；推送失败不影响持久化结果。
pub async fn send_message(
    service: &MessageService,
    message_data: SendMessageRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    if message_data.content.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "消息内容不能为空",
        )));
    }

    if message_data.receiver_id == user.id {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "不能给自己发消息",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_user_by_id(message_data.receiver_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReceiverNotFound,
                "接收者不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("发送消息失败: {e}"),
                )),
            );
        }
    }

    match storage.create_message(user.id, message_data).await {
        Ok(message) => {
            info!(
                "Message {} sent from {} to {}",
                message.id, message.sender_id, message.receiver_id
            );
            // 尽力而为的在线推送，接收者离线时静默跳过
            websocket::push_message_to_user(message.receiver_id, message.clone());
            Ok(HttpResponse::Created().json(ApiResponse::success(message, "消息发送成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("发送消息失败: {e}"),
            )),
        ),
    }
}
