use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
}

/// 准备服务器启动的上下文
///
/// 存储连接建立、迁移完成并通过自检后才允许对外服务；
/// 任何一步失败都向上传播，进程不进入监听状态。
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {}",
        storage.backend_info().storage_type
    );

    // 启动自检：确认 airports 表可查
    let airports = storage
        .count_airports()
        .await
        .context("Failed to verify geo schema")?;
    info!("Geo schema ready, {} airports available", airports);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext { storage })
}
