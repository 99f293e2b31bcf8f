use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 未读消息总数
pub async fn get_unread_count(
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

    match storage.count_unread_messages(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            json!({ "unread_count": count }),
            "获取未读数成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取未读数失败: {e}"),
            )),
        ),
    }
}
