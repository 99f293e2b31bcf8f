use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::UpsertSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 写入/更新草稿
///
/// 幂等 upsert，键为 (assignment_id, student_id)。
/// 仅被指派的学生可写，且作业必须处于活跃状态。
pub async fn upsert_submission(
    service: &SubmissionService,
    submission_data: UpsertSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    if user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "仅学生可以提交作业",
        )));
    }

    if submission_data.content.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "提交内容不能为空",
        )));
    }

    let storage = service.get_storage(request);
    let assignment_id = submission_data.assignment_id;

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
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
                    format!("保存草稿失败: {e}"),
                )),
            );
        }
    };

    // 归档作业不再接受新草稿，已有的 submitted/graded 行不受影响
    if !assignment.is_active() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AssignmentInactive,
            "作业已归档，不能再提交",
        )));
    }

    match storage.is_assigned(assignment_id, user.id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotAssigned,
                "该作业未指派给你",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存草稿失败: {e}"),
                )),
            );
        }
    }

    // 非草稿状态的行内容不可变，按状态区分拒绝原因，行保持原样
    match storage
        .get_submission_by_assignment_and_student(assignment_id, user.id)
        .await
    {
        Ok(Some(existing)) if !existing.status.content_editable() => {
            return if existing.status.is_terminal() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyGraded,
                    "提交已评分，内容不可修改",
                )))
            } else {
                Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::InvalidState,
                    "提交已递交，不能再修改草稿",
                )))
            };
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存草稿失败: {e}"),
                )),
            );
        }
    }

    match storage
        .upsert_draft(assignment_id, user.id, submission_data)
        .await
    {
        Ok(submission) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "草稿保存成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("保存草稿失败: {e}"),
            )),
        ),
    }
}
