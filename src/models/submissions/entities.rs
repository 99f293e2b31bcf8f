use serde::{Deserialize, Serialize};

// 提交状态机：draft → submitted → graded
//
// graded 与 returned 为终态，进入后不再有任何迁移。
// returned 仅在数据模型中保留，当前没有产生它的操作。
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Graded,
    Returned,
}

impl SubmissionStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
    pub const RETURNED: &'static str = "returned";

    /// 终态不允许任何后续迁移
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Graded | SubmissionStatus::Returned)
    }

    /// 状态迁移表
    pub fn can_become(&self, next: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!((self, next), (Draft, Submitted) | (Submitted, Graded))
    }

    /// 草稿内容是否仍可编辑
    pub fn content_editable(&self) -> bool {
        matches!(self, SubmissionStatus::Draft)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Draft => write!(f, "{}", Self::DRAFT),
            SubmissionStatus::Submitted => write!(f, "{}", Self::SUBMITTED),
            SubmissionStatus::Graded => write!(f, "{}", Self::GRADED),
            SubmissionStatus::Returned => write!(f, "{}", Self::RETURNED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DRAFT => Ok(SubmissionStatus::Draft),
            Self::SUBMITTED => Ok(SubmissionStatus::Submitted),
            Self::GRADED => Ok(SubmissionStatus::Graded),
            Self::RETURNED => Ok(SubmissionStatus::Returned),
            _ => Err(format!(
                "无效的提交状态: '{s}'. 支持的状态: draft, submitted, graded, returned"
            )),
        }
    }
}

// 提交实体，每个 (assignment, student) 对唯一一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    /// 附件为不透明 URL 列表，存储层负责 JSON 编解码
    pub attachments: Vec<String>,
    pub status: SubmissionStatus,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub graded_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 分数必须落在 [0, max_points] 闭区间内
pub fn score_in_range(score: f64, max_points: f64) -> bool {
    score >= 0.0 && score <= max_points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use SubmissionStatus::*;
        assert!(Draft.can_become(Submitted));
        assert!(Submitted.can_become(Graded));

        // 不允许跳级或回退
        assert!(!Draft.can_become(Graded));
        assert!(!Submitted.can_become(Draft));
        assert!(!Graded.can_become(Submitted));
        assert!(!Returned.can_become(Draft));
        assert!(!Returned.can_become(Graded));
    }

    #[test]
    fn test_graded_permits_no_transition() {
        use SubmissionStatus::*;
        for next in [Draft, Submitted, Graded, Returned] {
            assert!(!Graded.can_become(next));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!SubmissionStatus::Draft.is_terminal());
        assert!(!SubmissionStatus::Submitted.is_terminal());
        assert!(SubmissionStatus::Graded.is_terminal());
        assert!(SubmissionStatus::Returned.is_terminal());
    }

    #[test]
    fn test_only_draft_is_editable() {
        assert!(SubmissionStatus::Draft.content_editable());
        assert!(!SubmissionStatus::Submitted.content_editable());
        assert!(!SubmissionStatus::Graded.content_editable());
    }

    #[test]
    fn test_score_range_is_inclusive() {
        assert!(score_in_range(0.0, 100.0));
        assert!(score_in_range(100.0, 100.0));
        assert!(score_in_range(85.0, 100.0));
        assert!(!score_in_range(-0.5, 100.0));
        assert!(!score_in_range(100.5, 100.0));
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["draft", "submitted", "graded", "returned"] {
            let parsed: SubmissionStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("pending".parse::<SubmissionStatus>().is_err());
    }
}
