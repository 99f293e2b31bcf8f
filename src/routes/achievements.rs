use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::AchievementService;

// 懒加载的全局 AchievementService 实例
static ACHIEVEMENT_SERVICE: Lazy<AchievementService> = Lazy::new(AchievementService::new_lazy);

pub async fn list_my_achievements(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACHIEVEMENT_SERVICE.list_my_achievements(&req).await
}

// 配置路由
pub fn configure_achievement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/achievements")
            .wrap(middlewares::RequireJWT)
            .route("/my", web::get().to(list_my_achievements)),
    );
}
