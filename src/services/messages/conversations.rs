use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 会话列表
///
/// 每个对端一条摘要：最新消息 + 实际统计的未读数。
pub async fn list_conversations(
    service: &MessageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_conversations(user_id).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取会话列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取会话列表失败: {e}"),
            )),
        ),
    }
}
