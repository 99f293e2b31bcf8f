use serde::{Deserialize, Serialize};

// 成就记录（展示用，当前没有任何服务写入该表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub user_id: i64,
    pub lesson_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub achievement_type: String,
    pub title: String,
    pub points: i64,
    pub earned_at: chrono::DateTime<chrono::Utc>,
}
