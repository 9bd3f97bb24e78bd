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
macro_rules! define_classdesk_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum ClassDeskError {
            $($variant(String),)*
        }

        impl ClassDeskError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassDeskError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassDeskError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassDeskError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassDeskError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassDeskError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classdesk_errors! {
    NotFound("E001", "Resource Not Found"),
    Validation("E002", "Validation Error"),
    Conflict("E003", "Conflict"),
    Serialization("E004", "Serialization Error"),
    FileOperation("E005", "File Operation Error"),
    DateParse("E006", "Date Parse Error"),
    Configuration("E007", "Configuration Error"),
    StorageState("E008", "Storage State Error"),
}

impl ClassDeskError {
    /// 按实体类型构造 NotFound 错误，例如 "Class not found: 42"
    pub fn entity_not_found(kind: &str, id: &str) -> Self {
        ClassDeskError::NotFound(format!("{kind} not found: {id}"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClassDeskError::NotFound(_))
    }

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

impl fmt::Display for ClassDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassDeskError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ClassDeskError {
    fn from(err: std::io::Error) -> Self {
        ClassDeskError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassDeskError {
    fn from(err: serde_json::Error) -> Self {
        ClassDeskError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassDeskError {
    fn from(err: chrono::ParseError) -> Self {
        ClassDeskError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for ClassDeskError {
    fn from(err: config::ConfigError) -> Self {
        ClassDeskError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassDeskError>;
