use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 归档课程
///
/// 删除语义实现为软删除：状态置为 archived，进度行保留。
pub async fn archive_lesson(
    service: &LessonService,
    lesson_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    let allowed = match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) => lesson.created_by == user.id || user.role == UserRole::Admin,
        Ok(None) => false,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("归档课程失败: {e}"),
                )),
            );
        }
    };

    if !allowed {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "课程不存在或无权操作",
        )));
    }

    match storage.archive_lesson(lesson_id).await {
        Ok(true) => {
            info!("Lesson {} archived by user {}", lesson_id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("课程已归档")))
        }
        // 已归档课程再次归档不改变任何行
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::InvalidState,
            "课程已归档",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("归档课程失败: {e}"),
            )),
        ),
    }
}
