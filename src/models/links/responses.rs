use serde::{Deserialize, Serialize};

use super::entities::StudentParentLink;
use crate::models::users::entities::User;

// 关联条目，附带学生信息（家长查看子女列表用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkWithStudent {
    #[serde(flatten)]
    pub link: StudentParentLink,
    pub student: User,
}

// 关联列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub items: Vec<LinkWithStudent>,
}
