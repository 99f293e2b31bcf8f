use serde::{Deserialize, Serialize};

use super::entities::Submission;
use crate::models::PaginationInfo;

// 提交列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}
