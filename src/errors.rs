//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tinylearn_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TinyLearnError {
            $($variant(String),)*
        }

        impl TinyLearnError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TinyLearnError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TinyLearnError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TinyLearnError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TinyLearnError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TinyLearnError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tinylearn_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Io("E006", "I/O Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    InvalidState("E013", "Invalid State Transition"),
}

impl TinyLearnError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TinyLearnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TinyLearnError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TinyLearnError {
    fn from(err: sea_orm::DbErr) -> Self {
        TinyLearnError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TinyLearnError {
    fn from(err: std::io::Error) -> Self {
        TinyLearnError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TinyLearnError {
    fn from(err: serde_json::Error) -> Self {
        TinyLearnError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TinyLearnError {
    fn from(err: chrono::ParseError) -> Self {
        TinyLearnError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TinyLearnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TinyLearnError::cache_connection("test").code(), "E001");
        assert_eq!(TinyLearnError::database_config("test").code(), "E003");
        assert_eq!(TinyLearnError::validation("test").code(), "E007");
        assert_eq!(TinyLearnError::invalid_state("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TinyLearnError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            TinyLearnError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TinyLearnError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: TinyLearnError = parse_err.into();
        assert_eq!(err.code(), "E009");
    }
}
