use serde::Deserialize;

use super::entities::ProgressStatus;

// 更新进度请求，全部字段可选
//
// time_spent 为本次增量（分钟），在既有值上累加而非覆盖。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProgressRequest {
    pub status: Option<ProgressStatus>,
    pub score: Option<f64>,
    pub time_spent: Option<i64>,
    pub notes: Option<String>,
}

// 完成课程请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteLessonRequest {
    pub score: Option<f64>,
    pub time_spent: Option<i64>,
}
