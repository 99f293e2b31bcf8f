use serde::{Deserialize, Serialize};

// 系统状态响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatusResponse {
    pub name: String,
    pub version: String,
    pub environment: String,
    /// 运行时长（秒）
    pub uptime: i64,
}
