use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgressService;
use crate::models::progress::requests::UpdateProgressRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新进度
///
/// 部分更新：time_spent 为增量累加，状态只能向前推进。
/// 重复写当前状态是幂等的（重复完成会刷新完成时刻）。
pub async fn update_progress(
    service: &ProgressService,
    lesson_id: i64,
    update_data: UpdateProgressRequest,
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
                    format!("更新进度失败: {e}"),
                )),
            );
        }
    }

    if let Some(time_spent) = update_data.time_spent
        && time_spent < 0
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "学习时长增量不能为负数",
        )));
    }

    // 状态只能向前，不暴露回退
    if let Some(next) = update_data.status {
        match storage.get_progress(user.id, lesson_id).await {
            Ok(Some(existing))
                if existing.status != next && !existing.status.can_advance_to(next) =>
            {
                return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::InvalidState,
                    format!("进度状态不能从 {} 回退到 {}", existing.status, next),
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("更新进度失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.upsert_progress(user.id, lesson_id, update_data).await {
        Ok(progress) => Ok(HttpResponse::Ok().json(ApiResponse::success(progress, "进度更新成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新进度失败: {e}"),
            )),
        ),
    }
}
