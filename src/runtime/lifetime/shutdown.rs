use sea_orm::DatabaseConnection;
use tokio::signal;
use tracing::{error, info, warn};

pub async fn listen_for_shutdown(db: &DatabaseConnection) {
    // 等待 Ctrl+C 信号
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, closing database connection...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    // 关闭连接池
    if let Err(e) = db.clone().close().await {
        error!("Failed to close database connection: {}", e);
    } else {
        info!("Database connection closed, shutting down...");
    }
}
