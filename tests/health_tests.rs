//! Health endpoint tests

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use sea_orm::ConnectionTrait;
use tempfile::TempDir;

use airportdex::api::services::{AppStartTime, health_routes};
use airportdex::storage::SeaOrmStorage;

async fn fresh_storage() -> (TempDir, Arc<SeaOrmStorage>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("health_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite")
            .await
            .expect("Failed to create storage"),
    );
    (temp_dir, storage)
}

macro_rules! health_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .service(web::scope("/health").service(health_routes())),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_check_healthy() {
    let (_dir, storage) = fresh_storage().await;
    let app = health_app!(storage);

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["airports_count"], 0);
    assert_eq!(body["checks"]["storage"]["backend"], "sqlite");
}

#[actix_web::test]
async fn test_health_check_unhealthy_after_schema_break() {
    let (_dir, storage) = fresh_storage().await;
    storage
        .get_db()
        .execute_unprepared("DROP TABLE airports")
        .await
        .expect("Failed to drop airports table");

    let app = health_app!(storage);

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["storage"]["status"], "unhealthy");
    assert_eq!(
        body["checks"]["storage"]["airports_count"],
        serde_json::Value::Null
    );
}

#[actix_web::test]
async fn test_readiness_check() {
    let (_dir, storage) = fresh_storage().await;
    let app = health_app!(storage);

    let req = TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"OK"));
}

#[actix_web::test]
async fn test_liveness_check() {
    let (_dir, storage) = fresh_storage().await;
    let app = health_app!(storage);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
