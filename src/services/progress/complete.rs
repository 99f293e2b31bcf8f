use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProgressService;
use crate::models::progress::entities::ProgressStatus;
use crate::models::progress::requests::{CompleteLessonRequest, UpdateProgressRequest};
use crate::models::{ApiResponse, ErrorCode};

/// 完成课程
///
/// update 的便捷包装：status=completed，可携带分数和本次时长增量。
pub async fn complete_lesson(
    service: &ProgressService,
    lesson_id: i64,
    complete_data: CompleteLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = super::extract_claims(request) else {
        return Ok(super::unauthorized_response());
    };

    let storage = service.get_storage(request);

    match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LessonNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("完成课程失败: {e}"),
                )),
            );
        }
    }

    if let Some(time_spent) = complete_data.time_spent
        && time_spent < 0
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "学习时长增量不能为负数",
        )));
    }

    let update = UpdateProgressRequest {
        status: Some(ProgressStatus::Completed),
        score: complete_data.score,
        time_spent: complete_data.time_spent,
        notes: None,
    };

    match storage.upsert_progress(user.id, lesson_id, update).await {
        Ok(progress) => {
            info!("Lesson {} completed by user {}", lesson_id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(progress, "课程已完成")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("完成课程失败: {e}"),
            )),
        ),
    }
}
