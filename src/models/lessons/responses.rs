use serde::{Deserialize, Serialize};

use super::entities::Lesson;
use crate::models::PaginationInfo;

// 课程列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonListResponse {
    pub items: Vec<Lesson>,
    pub pagination: PaginationInfo,
}
