use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::lessons::requests::UpdateLessonRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_lesson(
    service: &LessonService,
    lesson_id: i64,
    update_data: UpdateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    // 创建者或管理员可以修改；不存在与无权限统一返回同一错误
    let allowed = match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) => lesson.created_by == user.id || user.role == UserRole::Admin,
        Ok(None) => false,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新课程失败: {e}"),
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

    match storage.update_lesson(lesson_id, update_data).await {
        Ok(Some(lesson)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "课程更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "课程不存在或无权操作",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课程失败: {e}"),
            )),
        ),
    }
}
