use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 提交详情
///
/// 学生限本人，教师限本人布置作业下的提交，管理员不限。
pub async fn get_submission(
    service: &SubmissionService,
    submission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取提交失败: {e}"),
                )),
            );
        }
    };

    let visible = match user.role {
        UserRole::Admin => true,
        UserRole::Student => submission.student_id == user.id,
        UserRole::Teacher => {
            match storage.get_assignment_by_id(submission.assignment_id).await {
                Ok(Some(assignment)) => assignment.teacher_id == user.id,
                Ok(None) => false,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("获取提交失败: {e}"),
                        ),
                    ));
                }
            }
        }
        UserRole::Parent => false,
    };

    if !visible {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "提交不存在或无权查看",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "获取提交成功")))
}
