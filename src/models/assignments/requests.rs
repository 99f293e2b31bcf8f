use serde::Deserialize;

use super::entities::AssignmentStatus;
use crate::models::users::requests::deserialize_opt_i64;

// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub lesson_id: Option<i64>,
    /// 被指派学生的用户 ID 列表
    pub assigned_to: Vec<i64>,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub max_points: Option<f64>,
}

// 更新作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub max_points: Option<f64>,
    pub assigned_to: Option<Vec<i64>>,
}

// 作业列表查询
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentListQuery {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub size: Option<i64>,
    pub status: Option<AssignmentStatus>,
    pub search: Option<String>,
}
