use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 按角色列出作业
///
/// 教师看自己布置的，学生看被指派的（附逾期标注），管理员看全部。
/// 家长没有作业视图。
pub async fn list_assignments(
    service: &AssignmentService,
    query: AssignmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录，请先登录",
        )));
    };

    let storage = service.get_storage(request);

    match user.role {
        UserRole::Teacher => match storage.list_assignments_by_teacher(user.id, query).await {
            Ok(response) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取作业列表成功")))
            }
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取作业列表失败: {e}"),
                )),
            ),
        },
        UserRole::Student => match storage.list_assignments_for_student(user.id, query).await {
            Ok(response) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取作业列表成功")))
            }
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取作业列表失败: {e}"),
                )),
            ),
        },
        UserRole::Admin => match storage.list_all_assignments(query).await {
            Ok(response) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取作业列表成功")))
            }
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取作业列表失败: {e}"),
                )),
            ),
        },
        UserRole::Parent => Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "家长没有作业视图",
        ))),
    }
}
