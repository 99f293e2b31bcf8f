//! 业务数据模型定义
//!
//! 与 entity 模块中的数据库实体分离：storage 层负责两者之间的转换。

pub mod common;

pub mod achievements;
pub mod assignments;
pub mod auth;
pub mod lessons;
pub mod links;
pub mod messages;
pub mod progress;
pub mod submissions;
pub mod system;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
