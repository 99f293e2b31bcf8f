use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LinkService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 家长查看自己的子女列表（路由层已限家长角色）
pub async fn list_my_children(
    service: &LinkService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_links_for_parent(user_id).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取子女列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取子女列表失败: {e}"),
            )),
        ),
    }
}
