use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从路径参数中安全提取 i64 ID 的提取器
///
/// 解析失败或非正数时返回统一的 JSON 错误响应，而不是 actix 默认的纯文本 404。
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:expr) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let value = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match value {
                    Some(id) => Ok($name(id)),
                    None => {
                        let body = ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            format!("路径参数 {} 必须是正整数", $param),
                        );
                        Err(ErrorBadRequest(
                            serde_json::to_string(&body).unwrap_or_default(),
                        ))
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeLessonIdI64, "lesson_id");
define_safe_i64_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_i64_extractor!(SafeSubmissionIdI64, "submission_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafePartnerIdI64, "partner_id");
define_safe_i64_extractor!(SafeLinkIdI64, "link_id");
