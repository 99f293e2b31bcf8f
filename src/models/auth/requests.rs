use serde::Deserialize;

use crate::models::users::entities::UserRole;

// 登录请求，username 字段同时接受用户名或邮箱
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 注册请求；admin 角色不可注册
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub profile_name: Option<String>,
}
