use std::fmt;

#[derive(Debug, Clone)]
pub enum AirportdexError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
}

impl AirportdexError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AirportdexError::DatabaseConfig(_) => "E001",
            AirportdexError::DatabaseConnection(_) => "E002",
            AirportdexError::DatabaseOperation(_) => "E003",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AirportdexError::DatabaseConfig(_) => "Database Configuration Error",
            AirportdexError::DatabaseConnection(_) => "Database Connection Error",
            AirportdexError::DatabaseOperation(_) => "Database Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AirportdexError::DatabaseConfig(msg) => msg,
            AirportdexError::DatabaseConnection(msg) => msg,
            AirportdexError::DatabaseOperation(msg) => msg,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AirportdexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AirportdexError {}

// 便捷的构造函数
impl AirportdexError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        AirportdexError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        AirportdexError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        AirportdexError::DatabaseOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AirportdexError {
    fn from(err: sea_orm::DbErr) -> Self {
        AirportdexError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AirportdexError>;
