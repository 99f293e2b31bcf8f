use serde::{Deserialize, Serialize};

// 家长与学生的关系类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ParentRelationship {
    Mother,
    Father,
    Guardian,
    Other,
}

impl std::fmt::Display for ParentRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentRelationship::Mother => write!(f, "mother"),
            ParentRelationship::Father => write!(f, "father"),
            ParentRelationship::Guardian => write!(f, "guardian"),
            ParentRelationship::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ParentRelationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mother" => Ok(ParentRelationship::Mother),
            "father" => Ok(ParentRelationship::Father),
            "guardian" => Ok(ParentRelationship::Guardian),
            "other" => Ok(ParentRelationship::Other),
            _ => Err(format!("Invalid parent relationship: {s}")),
        }
    }
}

// 学生-家长关联，每个 (student, parent) 对唯一一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentParentLink {
    pub id: i64,
    pub student_id: i64,
    pub parent_id: i64,
    pub relationship: ParentRelationship,
    pub can_receive_messages: bool,
    pub can_view_progress: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
