use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lessons::requests::{CreateLessonRequest, LessonListQuery, UpdateLessonRequest};
use crate::models::users::entities::UserRole;
use crate::services::LessonService;
use crate::utils::SafeIDI64;

// 懒加载的全局 LessonService 实例
static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

// HTTP处理程序
pub async fn list_lessons(
    req: HttpRequest,
    query: web::Query<LessonListQuery>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.list_lessons(query.into_inner(), &req).await
}

pub async fn get_lesson(req: HttpRequest, lesson_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_lesson(lesson_id.0, &req).await
}

pub async fn create_lesson(
    req: HttpRequest,
    lesson_data: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .create_lesson(lesson_data.into_inner(), &req)
        .await
}

pub async fn update_lesson(
    req: HttpRequest,
    lesson_id: SafeIDI64,
    update_data: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_lesson(lesson_id.0, update_data.into_inner(), &req)
        .await
}

// 删除即归档，行保留
pub async fn archive_lesson(req: HttpRequest, lesson_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.archive_lesson(lesson_id.0, &req).await
}

// 配置路由
pub fn configure_lesson_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_lessons))
            .route("/{id}", web::get().to(get_lesson))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::post().to(create_lesson))
                    .route("/{id}", web::put().to(update_lesson))
                    .route("/{id}", web::delete().to(archive_lesson)),
            ),
    );
}
