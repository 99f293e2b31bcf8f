use serde::{Deserialize, Serialize};

// 课程难度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LessonDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for LessonDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonDifficulty::Beginner => write!(f, "beginner"),
            LessonDifficulty::Intermediate => write!(f, "intermediate"),
            LessonDifficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for LessonDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(LessonDifficulty::Beginner),
            "intermediate" => Ok(LessonDifficulty::Intermediate),
            "advanced" => Ok(LessonDifficulty::Advanced),
            _ => Err(format!("Invalid lesson difficulty: {s}")),
        }
    }
}

// 课程状态：删除即归档，不做物理删除
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    Active,
    Archived,
}

impl std::fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonStatus::Active => write!(f, "active"),
            LessonStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for LessonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(LessonStatus::Active),
            "archived" => Ok(LessonStatus::Archived),
            _ => Err(format!("Invalid lesson status: {s}")),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub created_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: String,
    pub difficulty: LessonDifficulty,
    pub age_group: Option<String>,
    pub status: LessonStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
