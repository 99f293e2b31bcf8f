use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assignment(
    service: &AssignmentService,
    assignment_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    // 仅教师可以布置作业
    if user.role != UserRole::Teacher {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "仅教师可以布置作业",
        )));
    }

    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "作业标题不能为空",
        )));
    }

    // 截止时间必须严格晚于当前时刻
    if !Assignment::due_date_is_valid(assignment_data.due_date, chrono::Utc::now()) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::InvalidDueDate,
            "截止时间必须晚于当前时间",
        )));
    }

    if let Some(max_points) = assignment_data.max_points
        && max_points <= 0.0
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "满分必须为正数",
        )));
    }

    if assignment_data.assigned_to.is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::Validation,
            "指派名单不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 指派对象必须都是学生账号
    for student_id in &assignment_data.assigned_to {
        match storage.get_user_by_id(*student_id).await {
            Ok(Some(student)) if student.role == UserRole::Student => {}
            Ok(_) => {
                return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::Validation,
                    format!("指派对象 {student_id} 不是有效的学生账号"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建作业失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_assignment(user.id, assignment_data).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created by teacher {}",
                assignment.id, user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "作业创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
