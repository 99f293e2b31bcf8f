use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::links::requests::CreateLinkRequest;
use crate::models::users::entities::UserRole;
use crate::services::LinkService;
use crate::utils::SafeIDI64;

// 懒加载的全局 LinkService 实例
static LINK_SERVICE: Lazy<LinkService> = Lazy::new(LinkService::new_lazy);

// HTTP处理程序
pub async fn create_link(
    req: HttpRequest,
    link_data: web::Json<CreateLinkRequest>,
) -> ActixResult<HttpResponse> {
    LINK_SERVICE.create_link(link_data.into_inner(), &req).await
}

pub async fn delete_link(req: HttpRequest, link_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LINK_SERVICE.delete_link(link_id.0, &req).await
}

pub async fn list_my_children(req: HttpRequest) -> ActixResult<HttpResponse> {
    LINK_SERVICE.list_my_children(&req).await
}

// 配置路由
pub fn configure_link_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/links")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/my-children")
                    .wrap(middlewares::RequireRole::new(&UserRole::Parent))
                    .route("", web::get().to(list_my_children)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_link))
                    .route("/{id}", web::delete().to(delete_link)),
            ),
    );
}
