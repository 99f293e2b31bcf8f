//! API 错误码定义
//!
//! 数字错误码随统一响应结构返回给客户端，0 表示成功。
//! 分组规则：4xxYY 对应 HTTP 4xx 状态族，500xx 为服务端错误。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400 参数错误
    BadRequest = 40000,

    // 401 认证
    Unauthorized = 40100,
    AuthFailed = 40101,
    AccountPending = 40102,
    AccountSuspended = 40103,

    // 403 授权
    Forbidden = 40300,
    NotAssigned = 40301,
    AssignmentInactive = 40302,

    // 404 资源
    NotFound = 40400,
    UserNotFound = 40401,
    LessonNotFound = 40402,
    AssignmentNotFound = 40403,
    SubmissionNotFound = 40404,
    ReceiverNotFound = 40405,
    // 故意不区分"不存在"与"不属于你"，避免资源枚举
    NotFoundOrForbidden = 40406,
    MessageNotFound = 40407,
    LinkNotFound = 40408,

    // 409 冲突
    UserAlreadyExists = 40900,
    AlreadyLinked = 40901,
    AlreadyGraded = 40902,

    // 422 业务校验
    Validation = 42200,
    InvalidDueDate = 42201,
    ScoreOutOfRange = 42202,
    PastDue = 42203,
    InvalidState = 42204,
    RegisterFailed = 42205,

    // 429
    RateLimitExceeded = 42900,

    // 500
    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_follow_http_family() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32 / 100, 401);
        assert_eq!(ErrorCode::NotFoundOrForbidden as i32 / 100, 404);
        assert_eq!(ErrorCode::AlreadyGraded as i32 / 100, 409);
        assert_eq!(ErrorCode::PastDue as i32 / 100, 422);
    }
}
