use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::core::RepositoryGateway;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Readiness check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub storage: bool,
}

/// GET /health - Liveness check
/// Does not check dependencies
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: "loanledger".to_string(),
    })
}

/// GET /ready - Readiness check
/// Pings the repository gateway
pub async fn readiness_check(gateway: web::Data<dyn RepositoryGateway>) -> impl Responder {
    let storage = match gateway.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Storage readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: storage,
        checks: ReadinessChecks { storage },
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
