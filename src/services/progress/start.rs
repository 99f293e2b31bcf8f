use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgressService;
use crate::models::lessons::entities::LessonStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 开始课程
///
/// 幂等：已有进度行时原样返回。归档课程不能开始。
pub async fn start_lesson(
    service: &ProgressService,
    lesson_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = super::extract_claims(request) else {
        return Ok(super::unauthorized_response());
    };

    let storage = service.get_storage(request);

    match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) if lesson.status == LessonStatus::Active => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LessonNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("开始课程失败: {e}"),
                )),
            );
        }
    }

    match storage.start_lesson_progress(user.id, lesson_id).await {
        Ok(progress) => Ok(HttpResponse::Ok().json(ApiResponse::success(progress, "课程已开始"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("开始课程失败: {e}"),
            )),
        ),
    }
}
