use serde::Deserialize;

use super::entities::ParentRelationship;

// 创建学生-家长关联请求（仅管理员）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    pub student_id: i64,
    pub parent_id: i64,
    pub relationship: ParentRelationship,
    #[serde(default = "default_true")]
    pub can_receive_messages: bool,
    #[serde(default = "default_true")]
    pub can_view_progress: bool,
}

fn default_true() -> bool {
    true
}
