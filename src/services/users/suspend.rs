use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 停用账号
///
/// 软删除：只改状态，不删行，历史提交与进度保持可追溯。
pub async fn suspend_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许停用自己
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "不能停用当前登录账号",
        )));
    }

    match storage
        .update_user_status(user_id, UserStatus::Suspended)
        .await
    {
        Ok(Some(user)) => {
            info!("User {} suspended", user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "账号已停用")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("停用账号失败: {e}"),
            )),
        ),
    }
}
