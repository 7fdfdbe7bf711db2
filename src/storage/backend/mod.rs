//! SeaORM storage backend
//!
//! This module provides read-only access to the geographic reference data
//! using SeaORM, supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod query;

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::errors::{AirportdexError, Result};
use crate::storage::models::StorageBackendInfo;

pub use connection::{connect_generic, connect_sqlite, run_migrations};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite://")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(AirportdexError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
///
/// 只读客户端：地理数据由外部数据管理流程维护，本服务不做任何写入。
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(AirportdexError::database_config(
                "DATABASE_URL 未设置".to_string(),
            ));
        }

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        };

        // 运行迁移，失败则不允许对外服务
        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_info(&self) -> StorageBackendInfo {
        StorageBackendInfo {
            storage_type: self.backend_name.clone(),
        }
    }

    /// 获取数据库连接（用于优雅关闭等需要直接访问连接池的场景）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
