pub mod conversations;
pub mod mark_read;
pub mod send;
pub mod thread;
pub mod unread;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::messages::requests::{ConversationQuery, SendMessageRequest};
use crate::storage::Storage;

pub struct MessageService {
    storage: Option<Arc<dyn Storage>>,
}

impl MessageService {
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

    // 发送消息
    pub async fn send_message(
        &self,
        message_data: SendMessageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_message(self, message_data, request).await
    }

    // 会话列表
    pub async fn list_conversations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        conversations::list_conversations(self, request).await
    }

    // 与某对端的会话消息
    pub async fn get_conversation(
        &self,
        partner_id: i64,
        query: ConversationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        thread::get_conversation(self, partner_id, query, request).await
    }

    // 标记单条消息已读
    pub async fn mark_message_read(
        &self,
        message_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_message_read(self, message_id, request).await
    }

    // 未读消息总数
    pub async fn get_unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        unread::get_unread_count(self, request).await
    }
}
