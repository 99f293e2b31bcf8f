use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 更新作业
///
/// 限布置者本人，归属校验下沉到存储层的条件更新。
pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
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
            "仅教师可以修改作业",
        )));
    }

    if let Some(title) = &update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "作业标题不能为空",
        )));
    }

    if let Some(due_date) = update_data.due_date
        && !Assignment::due_date_is_valid(due_date, chrono::Utc::now())
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::InvalidDueDate,
            "截止时间必须晚于当前时间",
        )));
    }

    if let Some(max_points) = update_data.max_points
        && max_points <= 0.0
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "满分必须为正数",
        )));
    }

    let storage = service.get_storage(request);

    // 改指派名单时同样要求全员是学生账号
    if let Some(assigned_to) = &update_data.assigned_to {
        if assigned_to.is_empty() {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::Validation,
                "指派名单不能为空",
            )));
        }
        for student_id in assigned_to {
            match storage.get_user_by_id(*student_id).await {
                Ok(Some(student)) if student.role == UserRole::Student => {}
                Ok(_) => {
                    return Ok(HttpResponse::UnprocessableEntity().json(
                        ApiResponse::error_empty(
                            ErrorCode::Validation,
                            format!("指派对象 {student_id} 不是有效的学生账号"),
                        ),
                    ));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("更新作业失败: {e}"),
                        ),
                    ));
                }
            }
        }
    }

    match storage
        .update_assignment(assignment_id, user.id, update_data)
        .await
    {
        Ok(Some(assignment)) => {
            info!(
                "Assignment {} updated by teacher {}",
                assignment.id, user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "作业更新成功")))
        }
        // 不存在和不归属本人返回同一个 404，避免探测他人作业 ID
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "作业不存在或无权操作",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新作业失败: {e}"),
            )),
        ),
    }
}
