use serde::{Deserialize, Serialize};

use super::entities::Message;
use crate::models::PaginationInfo;

// 会话对端的简要信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPartner {
    pub user_id: i64,
    pub username: String,
    pub profile_name: Option<String>,
    pub role: String,
}

// 会话摘要：对端 + 最新一条消息 + 未读数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub partner: ConversationPartner,
    pub last_message: Message,
    /// 对端发给当前用户且未读的消息数
    pub unread_count: i64,
}

// 会话列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationListResponse {
    pub items: Vec<ConversationSummary>,
}

// 单一会话的消息翻页响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub items: Vec<Message>,
    pub pagination: PaginationInfo,
}
