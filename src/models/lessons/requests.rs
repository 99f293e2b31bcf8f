use serde::Deserialize;

use super::entities::LessonDifficulty;
use crate::models::users::requests::deserialize_opt_i64;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLessonRequest {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: String,
    pub difficulty: LessonDifficulty,
    pub age_group: Option<String>,
}

// 更新课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLessonRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<LessonDifficulty>,
    pub age_group: Option<String>,
}

// 课程列表查询
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonListQuery {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub size: Option<i64>,
    pub category: Option<String>,
    pub difficulty: Option<LessonDifficulty>,
    pub age_group: Option<String>,
    pub search: Option<String>,
    /// 仅 staff 可以请求包含归档课程
    #[serde(default)]
    pub include_archived: bool,
}
