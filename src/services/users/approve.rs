use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 审核通过待审核账号（pending -> active）
pub async fn approve_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
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
                    format!("审核用户失败: {e}"),
                )),
            );
        }
    };

    if user.status != UserStatus::Pending {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::InvalidState,
            "仅待审核账号可以审核通过",
        )));
    }

    match storage.update_user_status(user_id, UserStatus::Active).await {
        Ok(Some(user)) => {
            info!("User {} approved", user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "审核通过")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("审核用户失败: {e}"),
            )),
        ),
    }
}
