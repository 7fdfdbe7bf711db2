//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use tracing::warn;

use crate::api::services::{AppStartTime, airport_routes, health_routes};
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Prepares server components (storage, migrations)
/// 3. Configures and starts the HTTP server
/// 4. Listens for graceful shutdown signals
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    // Record application start time
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // Prepare server startup (storage, migrations, self-check)
    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let storage = startup.storage.clone();

    let config = crate::config::get_config();
    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let cpu_count = config.server.cpu_count.min(32);

    // Clone db reference before storage moves into HttpServer closure
    let db_for_shutdown = storage.get_db().clone();

    warn!("Starting server at http://{}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(web::scope("/health").service(health_routes()))
            .service(airport_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(cpu_count)
    .bind(bind_address)?
    .run();

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&db_for_shutdown) => {
            warn!("Graceful shutdown: server stopped");
        }
    }

    Ok(())
}
