use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LinkService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除学生-家长关联（路由层已限管理员）
pub async fn delete_link(
    service: &LinkService,
    link_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_link(link_id).await {
        Ok(true) => {
            info!("Link {} deleted", link_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("关联已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LinkNotFound,
            "关联不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除关联失败: {e}"),
            )),
        ),
    }
}
