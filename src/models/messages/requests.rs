use serde::Deserialize;

use crate::models::users::requests::deserialize_opt_i64;

// 发送消息请求
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: i64,
    pub related_student_id: Option<i64>,
    pub subject: Option<String>,
    pub content: String,
}

// 会话消息查询
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationQuery {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub size: Option<i64>,
}
