use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 归档作业（删除语义，行保留）
pub async fn archive_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    if user.role != UserRole::Teacher {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "仅教师可以归档作业",
        )));
    }

    let storage = service.get_storage(request);

    match storage.archive_assignment(assignment_id, user.id).await {
        Ok(true) => {
            info!(
                "Assignment {} archived by teacher {}",
                assignment_id, user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("作业已归档")))
        }
        // 不存在、已归档和不归属本人统一按 404 处理
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "作业不存在或无权操作",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("归档作业失败: {e}"),
            )),
        ),
    }
}
