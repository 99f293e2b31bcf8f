pub mod complete;
pub mod list;
pub mod start;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::progress::requests::{CompleteLessonRequest, UpdateProgressRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 开始课程
    pub async fn start_lesson(
        &self,
        lesson_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        start::start_lesson(self, lesson_id, request).await
    }

    // 更新进度
    pub async fn update_progress(
        &self,
        lesson_id: i64,
        update_data: UpdateProgressRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_progress(self, lesson_id, update_data, request).await
    }

    // 完成课程
    pub async fn complete_lesson(
        &self,
        lesson_id: i64,
        complete_data: CompleteLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        complete::complete_lesson(self, lesson_id, complete_data, request).await
    }

    // 某学生的进度列表
    pub async fn list_progress(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_progress(self, student_id, request).await
    }

    // 某学生的进度统计
    pub async fn get_stats(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        stats::get_stats(self, student_id, request).await
    }
}

/// 校验调用者是否可以读取某学生的进度
///
/// 学生限本人，教师和管理员不限，家长需要 can_view_progress 的关联。
pub(crate) async fn check_read_access(
    storage: &Arc<dyn Storage>,
    viewer: &crate::models::users::entities::User,
    student_id: i64,
) -> Result<(), HttpResponse> {
    let allowed = match viewer.role {
        UserRole::Admin | UserRole::Teacher => true,
        UserRole::Student => viewer.id == student_id,
        UserRole::Parent => match storage.get_link(student_id, viewer.id).await {
            Ok(link) => link.is_some_and(|link| link.can_view_progress),
            Err(e) => {
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("获取学习进度失败: {e}"),
                    )),
                );
            }
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "无权查看该学生的学习进度",
        )))
    }
}

pub(crate) fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "未登录，请先登录",
    ))
}

pub(crate) fn extract_claims(
    request: &HttpRequest,
) -> Option<crate::models::users::entities::User> {
    RequireJWT::extract_user_claims(request)
}
