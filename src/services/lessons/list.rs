use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::middlewares::RequireJWT;
use crate::models::lessons::requests::LessonListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_lessons(
    service: &LessonService,
    mut query: LessonListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 归档课程仅 staff 可见
    let is_staff = RequireJWT::extract_user_role(request)
        .map(|role| UserRole::staff_roles().contains(&&role))
        .unwrap_or(false);
    if !is_staff {
        query.include_archived = false;
    }

    let storage = service.get_storage(request);

    match storage.list_lessons_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取课程列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课程列表失败: {e}"),
            )),
        ),
    }
}
