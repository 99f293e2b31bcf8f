use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AchievementService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 当前用户的成就列表（只读，服务不产生成就）
pub async fn list_my_achievements(
    service: &AchievementService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_achievements_for_user(user_id).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取成就列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取成就列表失败: {e}"),
            )),
        ),
    }
}
