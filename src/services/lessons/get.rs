use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::lessons::entities::LessonStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_lesson(
    service: &LessonService,
    lesson_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) => {
            // 归档课程对非 staff 表现为不存在
            let is_staff = RequireJWT::extract_user_role(request)
                .map(|role| UserRole::staff_roles().contains(&&role))
                .unwrap_or(false);
            if lesson.status == LessonStatus::Archived && !is_staff {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::LessonNotFound,
                    "课程不存在",
                )));
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "获取课程成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LessonNotFound,
            "课程不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课程失败: {e}"),
            )),
        ),
    }
}
