use serde::Deserialize;

use crate::models::users::requests::deserialize_opt_i64;

// 创建/更新草稿请求，幂等 upsert，键为 (assignment_id, student_id)
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSubmissionRequest {
    pub assignment_id: i64,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub score: f64,
    pub feedback: Option<String>,
}

// 提交列表查询（教师视角）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionListQuery {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub size: Option<i64>,
    pub status: Option<crate::models::submissions::entities::SubmissionStatus>,
}
