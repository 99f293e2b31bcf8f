use serde::{Deserialize, Serialize};

// 站内消息实体（定向 sender → receiver）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    /// 家长-教师会话关联到的学生
    pub related_student_id: Option<i64>,
    pub subject: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub read_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
