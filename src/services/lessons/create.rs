use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::lessons::requests::CreateLessonRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_lesson(
    service: &LessonService,
    lesson_data: CreateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    if lesson_data.title.trim().is_empty() || lesson_data.category.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "课程标题与分类不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_lesson(user_id, lesson_data).await {
        Ok(lesson) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(lesson, "课程创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建课程失败: {e}"),
            )),
        ),
    }
}
