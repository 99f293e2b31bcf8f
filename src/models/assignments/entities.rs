use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::submissions::entities::SubmissionStatus;

pub const DEFAULT_MAX_POINTS: f64 = 100.0;

// 作业状态：删除即归档
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,
    Archived,
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Active => write!(f, "active"),
            AssignmentStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AssignmentStatus::Active),
            "archived" => Ok(AssignmentStatus::Archived),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub teacher_id: i64,
    pub lesson_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub max_points: f64,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.status == AssignmentStatus::Active
    }

    /// 截止时间必须严格晚于当前时刻，恰好等于当前时刻视为无效
    pub fn due_date_is_valid(due_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        due_date > now
    }

    /// 学生视角是否已逾期：截止已过且没有超出 draft 状态的提交
    pub fn is_overdue_for(
        &self,
        now: DateTime<Utc>,
        submission_status: Option<SubmissionStatus>,
    ) -> bool {
        if self.due_date >= now {
            return false;
        }
        match submission_status {
            None | Some(SubmissionStatus::Draft) => true,
            Some(_) => false,
        }
    }

    /// 距截止天数，已过期为负数
    pub fn days_until_due(&self, now: DateTime<Utc>) -> i64 {
        (self.due_date - now).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn assignment_due(due_date: DateTime<Utc>) -> Assignment {
        let now = Utc::now();
        Assignment {
            id: 1,
            teacher_id: 10,
            lesson_id: None,
            title: "quiz".into(),
            description: None,
            due_date,
            max_points: DEFAULT_MAX_POINTS,
            status: AssignmentStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_due_date_boundary_is_strict() {
        let now = Utc::now();
        // 恰好等于当前时刻无效，晚 1 毫秒即有效
        assert!(!Assignment::due_date_is_valid(now, now));
        assert!(Assignment::due_date_is_valid(
            now + Duration::milliseconds(1),
            now
        ));
        assert!(!Assignment::due_date_is_valid(
            now - Duration::seconds(1),
            now
        ));
    }

    #[test]
    fn test_overdue_depends_on_submission_state() {
        let now = Utc::now();
        let past = assignment_due(now - Duration::days(1));
        assert!(past.is_overdue_for(now, None));
        assert!(past.is_overdue_for(now, Some(SubmissionStatus::Draft)));
        assert!(!past.is_overdue_for(now, Some(SubmissionStatus::Submitted)));
        assert!(!past.is_overdue_for(now, Some(SubmissionStatus::Graded)));

        let future = assignment_due(now + Duration::days(1));
        assert!(!future.is_overdue_for(now, None));
    }

    #[test]
    fn test_days_until_due_sign() {
        let now = Utc::now();
        assert_eq!(assignment_due(now + Duration::days(3)).days_until_due(now), 3);
        assert_eq!(
            assignment_due(now - Duration::days(2)).days_until_due(now),
            -2
        );
    }
}
