use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::ConversationQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 与某对端的会话消息（倒序翻页）
///
/// 打开会话即把对端发来的消息全部置为已读。
pub async fn get_conversation(
    service: &MessageService,
    partner_id: i64,
    query: ConversationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_user_by_id(partner_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "用户不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取会话失败: {e}"),
                )),
            );
        }
    }

    let response = match storage.list_conversation(user_id, partner_id, query).await {
        Ok(response) => response,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取会话失败: {e}"),
                )),
            );
        }
    };

    if let Err(e) = storage.mark_conversation_read(user_id, partner_id).await {
        tracing::warn!("Failed to mark conversation as read: {e}");
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取会话成功")))
}
