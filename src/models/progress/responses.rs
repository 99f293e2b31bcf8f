use serde::{Deserialize, Serialize};

use super::entities::Progress;

// 进度统计响应，每次请求从原始行现算，无缓存聚合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStatsResponse {
    pub total_lessons: i64,
    pub completed_lessons: i64,
    pub in_progress_lessons: i64,
    /// 完成率（百分比，两位小数）
    pub completion_rate: f64,
    /// 已完成课程的平均分（两位小数）；没有可用分数时为 None
    pub average_score: Option<f64>,
    /// 累计学习时长（分钟）
    pub total_time_spent: i64,
}

// 进度列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressListResponse {
    pub items: Vec<Progress>,
}
