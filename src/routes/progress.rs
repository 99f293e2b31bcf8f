use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::progress::requests::{CompleteLessonRequest, UpdateProgressRequest};
use crate::services::ProgressService;
use crate::utils::{SafeLessonIdI64, SafeStudentIdI64};

// 懒加载的全局 ProgressService 实例
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

// HTTP处理程序
pub async fn start_lesson(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.start_lesson(lesson_id.0, &req).await
}

pub async fn update_progress(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
    update_data: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .update_progress(lesson_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn complete_lesson(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
    complete_data: web::Json<CompleteLessonRequest>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .complete_lesson(lesson_id.0, complete_data.into_inner(), &req)
        .await
}

pub async fn list_student_progress(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.list_progress(student_id.0, &req).await
}

pub async fn get_student_stats(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.get_stats(student_id.0, &req).await
}

// 配置路由
pub fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/progress")
            .wrap(middlewares::RequireJWT)
            .route("/lessons/{lesson_id}/start", web::post().to(start_lesson))
            .route("/lessons/{lesson_id}", web::patch().to(update_progress))
            .route(
                "/lessons/{lesson_id}/complete",
                web::post().to(complete_lesson),
            )
            .route(
                "/students/{student_id}",
                web::get().to(list_student_progress),
            )
            .route(
                "/students/{student_id}/stats",
                web::get().to(get_student_stats),
            ),
    );
}
