use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::SubmissionListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 某作业下的全部提交
///
/// 教师限本人布置的作业，管理员不限。
pub async fn list_submissions(
    service: &SubmissionService,
    assignment_id: i64,
    query: SubmissionListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    let allowed = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => {
            user.role == UserRole::Admin
                || (user.role == UserRole::Teacher && assignment.teacher_id == user.id)
        }
        Ok(None) => false,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取提交列表失败: {e}"),
                )),
            );
        }
    };

    if !allowed {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "作业不存在或无权查看",
        )));
    }

    match storage
        .list_submissions_for_assignment(assignment_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取提交列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取提交列表失败: {e}"),
            )),
        ),
    }
}
