use serde::{Deserialize, Serialize};

use super::entities::Assignment;
use crate::models::PaginationInfo;
use crate::models::submissions::entities::SubmissionStatus;

// 作业列表响应（教师/管理员视角）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// 作业详情响应（教师/管理员视角，含指派名单）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDetailResponse {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub assigned_to: Vec<i64>,
}

// 学生视角的作业条目，附带截止状态注解
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentAssignmentItem {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub submission_status: Option<SubmissionStatus>,
    pub is_overdue: bool,
    pub days_until_due: i64,
}

// 学生作业列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentAssignmentListResponse {
    pub items: Vec<StudentAssignmentItem>,
    pub pagination: PaginationInfo,
}
