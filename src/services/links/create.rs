use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LinkService;
use crate::models::links::requests::CreateLinkRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 创建学生-家长关联
///
/// 路由层已限管理员；两端账号的角色必须匹配。
pub async fn create_link(
    service: &LinkService,
    link_data: CreateLinkRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(link_data.student_id).await {
        Ok(Some(student)) if student.role == UserRole::Student => {}
        Ok(_) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::Validation,
                "student_id 不是有效的学生账号",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建关联失败: {e}"),
                )),
            );
        }
    }

    match storage.get_user_by_id(link_data.parent_id).await {
        Ok(Some(parent)) if parent.role == UserRole::Parent => {}
        Ok(_) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::Validation,
                "parent_id 不是有效的家长账号",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建关联失败: {e}"),
                )),
            );
        }
    }

    match storage
        .get_link(link_data.student_id, link_data.parent_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyLinked,
                "该学生与家长已建立关联",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建关联失败: {e}"),
                )),
            );
        }
    }

    match storage.create_link(link_data).await {
        Ok(link) => {
            info!(
                "Link {} created: student {} parent {}",
                link.id, link.student_id, link.parent_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(link, "关联创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建关联失败: {e}"),
            )),
        ),
    }
}
