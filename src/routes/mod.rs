// Route exports
pub mod applications;
pub mod eligibility;
pub mod matches;
pub mod questionnaire;
pub mod schemes;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::ValidationErrors;

use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, Scheme};
use crate::services::{CacheError, CacheKey, CacheManager, PostgresClient, PostgresError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub admin_api_key: Option<String>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(questionnaire::configure)
            .configure(eligibility::configure)
            .configure(matches::configure)
            .configure(schemes::configure)
            .configure(applications::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn validation_failed(errors: &ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Bad request".to_string(),
        message: message.into(),
        status_code: 400,
    })
}

pub(crate) fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: message.into(),
        status_code: 404,
    })
}

pub(crate) fn storage_failed(context: &str, err: &PostgresError) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: err.to_string(),
        status_code: 500,
    })
}

/// Load the scheme catalog, serving from cache when possible
pub(crate) async fn load_schemes(state: &AppState) -> Result<Vec<Scheme>, PostgresError> {
    let key = CacheKey::schemes();

    match state.cache.get::<Vec<Scheme>>(&key).await {
        Ok(schemes) => {
            tracing::debug!("Serving {} schemes from cache", schemes.len());
            return Ok(schemes);
        }
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Scheme cache read failed, falling back to database: {}", e),
    }

    let schemes = state.postgres.fetch_schemes().await?;

    if let Err(e) = state.cache.set(&key, &schemes).await {
        tracing::warn!("Failed to cache scheme catalog: {}", e);
    }

    Ok(schemes)
}

/// Drop cached catalog entries after an admin write
pub(crate) async fn invalidate_schemes(state: &AppState, id: Option<&str>) {
    let mut keys = vec![CacheKey::schemes()];
    keys.extend(id.map(CacheKey::scheme));

    for key in keys {
        if let Err(e) = state.cache.delete(&key).await {
            tracing::warn!("Failed to invalidate cache key {}: {}", key, e);
        }
    }
}
