use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 提交草稿（draft -> submitted）
///
/// 仅提交归属的学生本人，且未过截止时间。
pub async fn submit_submission(
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
                    format!("提交失败: {e}"),
                )),
            );
        }
    };

    // 非本人的提交按不存在处理
    if submission.student_id != user.id {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "提交不存在或无权操作",
        )));
    }

    if !submission.status.can_become(SubmissionStatus::Submitted) {
        return if submission.status.is_terminal() {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyGraded,
                "提交已评分，不能重复递交",
            )))
        } else {
            Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::InvalidState,
                format!("当前状态 {} 不能递交", submission.status),
            )))
        };
    }

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
                    format!("提交失败: {e}"),
                )),
            );
        }
    };

    // 截止时刻本身仍可提交，过后拒绝
    if chrono::Utc::now() > assignment.due_date {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::PastDue,
            "已过截止时间，不能递交",
        )));
    }

    match storage.submit_submission(submission_id).await {
        Ok(Some(submission)) => {
            info!(
                "Submission {} submitted by student {}",
                submission.id, user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "递交成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交失败: {e}"),
            )),
        ),
    }
}
