use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::{SubmissionStatus, score_in_range};
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 评分（submitted -> graded）
///
/// 仅父作业的布置教师可评分，分数落在 [0, max_points] 闭区间。
pub async fn grade_submission(
    service: &SubmissionService,
    submission_id: i64,
    grade_data: GradeSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    if user.role != UserRole::Teacher {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "仅教师可以评分",
        )));
    }

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
                    format!("评分失败: {e}"),
                )),
            );
        }
    };

    let assignment = match storage
        .get_assignment_by_id(submission.assignment_id)
        .await
    {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("评分失败: {e}"),
                )),
            );
        }
    };

    // 他人作业下的提交按不存在处理
    if assignment.teacher_id != user.id {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "提交不存在或无权操作",
        )));
    }

    if !submission.status.can_become(SubmissionStatus::Graded) {
        return if submission.status.is_terminal() {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyGraded,
                "提交已评分，不能重复评分",
            )))
        } else {
            Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::InvalidState,
                format!("当前状态 {} 不能评分", submission.status),
            )))
        };
    }

    if !score_in_range(grade_data.score, assignment.max_points) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ScoreOutOfRange,
            format!("分数必须在 0 到 {} 之间", assignment.max_points),
        )));
    }

    match storage
        .grade_submission(submission_id, user.id, grade_data.score, grade_data.feedback)
        .await
    {
        Ok(Some(submission)) => {
            info!(
                "Submission {} graded {} by teacher {}",
                submission.id, grade_data.score, user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评分成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
