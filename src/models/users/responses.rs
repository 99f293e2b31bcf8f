use serde::{Deserialize, Serialize};

use super::entities::User;
use crate::models::PaginationInfo;

// 用户列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}
