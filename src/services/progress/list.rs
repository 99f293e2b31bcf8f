use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProgressService;
use crate::models::progress::responses::ProgressListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 某学生的进度列表
pub async fn list_progress(
    service: &ProgressService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = super::extract_claims(request) else {
        return Ok(super::unauthorized_response());
    };

    let storage = service.get_storage(request);

    if let Err(response) = super::check_read_access(&storage, &user, student_id).await {
        return Ok(response);
    }

    match storage.list_progress_for_user(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProgressListResponse { items },
            "获取进度列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取进度列表失败: {e}"),
            )),
        ),
    }
}
