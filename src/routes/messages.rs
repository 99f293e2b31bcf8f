use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::messages::requests::{ConversationQuery, SendMessageRequest};
use crate::services::MessageService;
use crate::utils::{SafeIDI64, SafePartnerIdI64};

// 懒加载的全局 MessageService 实例
static MESSAGE_SERVICE: Lazy<MessageService> = Lazy::new(MessageService::new_lazy);

// HTTP处理程序
pub async fn send_message(
    req: HttpRequest,
    message_data: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .send_message(message_data.into_inner(), &req)
        .await
}

pub async fn list_conversations(req: HttpRequest) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.list_conversations(&req).await
}

pub async fn get_conversation(
    req: HttpRequest,
    partner_id: SafePartnerIdI64,
    query: web::Query<ConversationQuery>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .get_conversation(partner_id.0, query.into_inner(), &req)
        .await
}

pub async fn mark_message_read(
    req: HttpRequest,
    message_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.mark_message_read(message_id.0, &req).await
}

pub async fn get_unread_count(req: HttpRequest) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.get_unread_count(&req).await
}

// 配置路由
pub fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/messages")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(send_message))
            .route("/conversations", web::get().to(list_conversations))
            .route(
                "/conversations/{partner_id}",
                web::get().to(get_conversation),
            )
            .route("/unread-count", web::get().to(get_unread_count))
            .route("/{id}/read", web::patch().to(mark_message_read)),
    );
}
