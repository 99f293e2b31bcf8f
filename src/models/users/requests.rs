use serde::Deserialize;

use super::entities::{UserRole, UserStatus};
use crate::models::common::pagination::deserialize_string_to_i64;

// 创建用户请求（注册与管理员建号共用，password 为已哈希值）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
}

// 更新用户请求（资料字段；角色创建后不可变）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
    pub status: Option<UserStatus>,
}

// 用户列表查询
#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
}

pub(crate) fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_string_to_i64")] i64);

    Option::<Wrapper>::deserialize(deserializer).map(|opt| opt.map(|w| w.0))
}
