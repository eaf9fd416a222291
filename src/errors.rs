use std::fmt;

#[derive(Debug, Clone)]
pub enum QuankError {
    Http(String),
    Timeout(String),
    Serialization(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Unauthorized(String),
    Api { code: i32, message: String },
    Internal(String),
}

impl QuankError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            QuankError::Http(_) => "E001",
            QuankError::Timeout(_) => "E002",
            QuankError::Serialization(_) => "E003",
            QuankError::FileOperation(_) => "E004",
            QuankError::Validation(_) => "E005",
            QuankError::NotFound(_) => "E006",
            QuankError::Unauthorized(_) => "E007",
            QuankError::Api { .. } => "E008",
            QuankError::Internal(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            QuankError::Http(_) => "HTTP Error",
            QuankError::Timeout(_) => "Request Timeout",
            QuankError::Serialization(_) => "Serialization Error",
            QuankError::FileOperation(_) => "File Operation Error",
            QuankError::Validation(_) => "Validation Error",
            QuankError::NotFound(_) => "Resource Not Found",
            QuankError::Unauthorized(_) => "Unauthorized",
            QuankError::Api { .. } => "API Error",
            QuankError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            QuankError::Http(msg)
            | QuankError::Timeout(msg)
            | QuankError::Serialization(msg)
            | QuankError::FileOperation(msg)
            | QuankError::Validation(msg)
            | QuankError::NotFound(msg)
            | QuankError::Unauthorized(msg)
            | QuankError::Internal(msg) => msg,
            QuankError::Api { message, .. } => message,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        match self {
            QuankError::Api { code, message } => {
                format!("{} ({}): {}", self.error_type(), code, message)
            }
            _ => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for QuankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuankError {}

// 便捷的构造函数
impl QuankError {
    pub fn http<T: Into<String>>(msg: T) -> Self {
        QuankError::Http(msg.into())
    }

    pub fn timeout<T: Into<String>>(msg: T) -> Self {
        QuankError::Timeout(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        QuankError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        QuankError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        QuankError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        QuankError::NotFound(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        QuankError::Unauthorized(msg.into())
    }

    pub fn api<T: Into<String>>(code: i32, msg: T) -> Self {
        QuankError::Api {
            code,
            message: msg.into(),
        }
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        QuankError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<ureq::Error> for QuankError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(t) => QuankError::Timeout(format!("{:?}", t)),
            ureq::Error::StatusCode(401) | ureq::Error::StatusCode(403) => {
                QuankError::Unauthorized(err.to_string())
            }
            ureq::Error::StatusCode(404) => QuankError::NotFound(err.to_string()),
            other => QuankError::Http(other.to_string()),
        }
    }
}

impl From<std::io::Error> for QuankError {
    fn from(err: std::io::Error) -> Self {
        QuankError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for QuankError {
    fn from(err: serde_json::Error) -> Self {
        QuankError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuankError>;
