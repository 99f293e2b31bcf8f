use serde::{Deserialize, Serialize};

// 学习进度状态，单向推进：not_started → in_progress → completed
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    fn rank(&self) -> u8 {
        match self {
            ProgressStatus::NotStarted => 0,
            ProgressStatus::InProgress => 1,
            ProgressStatus::Completed => 2,
        }
    }

    /// 状态只能向前，不暴露回退
    pub fn can_advance_to(&self, next: ProgressStatus) -> bool {
        next.rank() > self.rank()
    }
}

impl<'de> Deserialize<'de> for ProgressStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressStatus::NotStarted => write!(f, "not_started"),
            ProgressStatus::InProgress => write!(f, "in_progress"),
            ProgressStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ProgressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(ProgressStatus::NotStarted),
            "in_progress" => Ok(ProgressStatus::InProgress),
            "completed" => Ok(ProgressStatus::Completed),
            _ => Err(format!(
                "无效的进度状态: '{s}'. 支持的状态: not_started, in_progress, completed"
            )),
        }
    }
}

// 进度实体，每个 (user, lesson) 对唯一一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub lesson_id: i64,
    pub status: ProgressStatus,
    pub score: Option<f64>,
    /// 累计学习时长（分钟），只增不减
    pub time_spent: i64,
    pub notes: Option<String>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic() {
        use ProgressStatus::*;
        assert!(NotStarted.can_advance_to(InProgress));
        assert!(NotStarted.can_advance_to(Completed));
        assert!(InProgress.can_advance_to(Completed));

        assert!(!InProgress.can_advance_to(NotStarted));
        assert!(!Completed.can_advance_to(InProgress));
        assert!(!Completed.can_advance_to(Completed));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "in_progress".parse::<ProgressStatus>().unwrap(),
            ProgressStatus::InProgress
        );
        assert!("done".parse::<ProgressStatus>().is_err());
    }
}
