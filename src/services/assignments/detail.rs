use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::AssignmentDetailResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 作业详情
///
/// 教师限本人布置的，学生限被指派的，管理员不限。
pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

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
                    format!("获取作业失败: {e}"),
                )),
            );
        }
    };

    let visible = match user.role {
        UserRole::Admin => true,
        UserRole::Teacher => assignment.teacher_id == user.id,
        UserRole::Student => match storage.is_assigned(assignment_id, user.id).await {
            Ok(assigned) => assigned,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("获取作业失败: {e}"),
                    )),
                );
            }
        },
        UserRole::Parent => false,
    };

    if !visible {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFoundOrForbidden,
            "作业不存在或无权查看",
        )));
    }

    // 指派名单只对教师和管理员展示
    if matches!(user.role, UserRole::Teacher | UserRole::Admin) {
        let assigned_to = match storage.list_assignment_assignees(assignment_id).await {
            Ok(ids) => ids,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("获取作业失败: {e}"),
                    )),
                );
            }
        };
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentDetailResponse {
                assignment,
                assigned_to,
            },
            "获取作业成功",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "获取作业成功")))
}
