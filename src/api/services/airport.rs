use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::storage::{AirportView, SeaOrmStorage};

/// 查询参数原样传给存储层，不做格式校验；缺省时按空串处理
#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    #[serde(default)]
    pub iata_code: String,
}

#[derive(Debug, Serialize)]
struct AirportEnvelope {
    airport: AirportView,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

pub struct AirportService {}

impl AirportService {
    /// GET /airport?iata_code=XXX → 200 / 404 / 500 三态映射
    pub async fn get_airport(
        query: web::Query<AirportQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        match storage.find_by_iata(&query.iata_code).await {
            Ok(Some(airport)) => HttpResponse::Ok().json(AirportEnvelope { airport }),
            Ok(None) => {
                debug!("Airport not found for IATA code: {}", query.iata_code);
                Self::not_found_response()
            }
            Err(e) => {
                // 内部原因只进日志，响应体保持不透明
                error!("Database error during airport lookup: {}", e);
                Self::error_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::NotFound().json(ErrorBody {
            error: "Airport not found",
        })
    }

    #[inline]
    fn error_response() -> HttpResponse {
        HttpResponse::InternalServerError().json(ErrorBody {
            error: "Internal server error",
        })
    }
}

/// Airport 路由配置
pub fn airport_routes() -> actix_web::Scope {
    web::scope("").route("/airport", web::get().to(AirportService::get_airport))
}
