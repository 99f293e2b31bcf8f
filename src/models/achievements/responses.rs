use serde::{Deserialize, Serialize};

use super::entities::Achievement;

// 成就列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementListResponse {
    pub items: Vec<Achievement>,
    pub total_points: i64,
}
