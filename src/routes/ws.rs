use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Deserialize;

use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::websocket::WebSocketService;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: String,
}

// WebSocket 升级入口
//
// 浏览器的 WebSocket API 不能带自定义请求头，token 走查询参数。
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    query: web::Query<WsQuery>,
    storage: web::Data<Arc<dyn Storage>>,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_access_token(&query.token) {
        Ok(claims) => claims,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无效的访问令牌",
            )));
        }
    };

    let user_id: i64 = match claims.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无效的访问令牌",
            )));
        }
    };

    // 连接建立前再确认一次账号可用
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status == UserStatus::Active => {}
        Ok(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "账号不可用",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("建立连接失败: {e}"),
                )),
            );
        }
    }

    let (response, session, stream) = actix_ws::handle(&req, body)?;

    actix_web::rt::spawn(WebSocketService::handle_connection(
        user_id, session, stream,
    ));

    Ok(response)
}

// 配置路由
pub fn configure_ws_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/ws").route("", web::get().to(ws_connect)));
}
