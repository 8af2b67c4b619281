use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreatedResponse, ErrorResponse, Scheme, SchemePayload, SchemeSummary};
use crate::routes::{
    invalidate_schemes, load_schemes, not_found, storage_failed, validation_failed, AppState,
};
use crate::services::CacheKey;

pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Configure public scheme lookup and admin catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/schemes/{id}", web::get().to(get_scheme_summary))
        .service(
            web::resource("/admin/schemes")
                .route(web::get().to(list_schemes))
                .route(web::post().to(create_scheme)),
        )
        .service(
            web::resource("/admin/schemes/{id}")
                .route(web::get().to(get_scheme))
                .route(web::put().to(update_scheme))
                .route(web::delete().to(delete_scheme)),
        );
}

/// Check the admin key header against the configured key
///
/// With no key configured every request is refused.
pub(crate) fn authorize_admin(req: &HttpRequest, expected: Option<&str>) -> Result<(), HttpResponse> {
    let provided = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match (expected, provided) {
        (Some(expected), Some(provided)) if !expected.is_empty() && expected == provided => Ok(()),
        _ => {
            tracing::warn!("Rejected admin request to {}", req.path());
            Err(HttpResponse::Forbidden().json(ErrorResponse {
                error: "Forbidden".to_string(),
                message: "A valid admin key is required".to_string(),
                status_code: 403,
            }))
        }
    }
}

async fn find_scheme(state: &AppState, id: &str) -> Result<Option<Scheme>, HttpResponse> {
    let key = CacheKey::scheme(id);
    if let Ok(scheme) = state.cache.get::<Scheme>(&key).await {
        return Ok(Some(scheme));
    }

    let scheme = state
        .postgres
        .get_scheme(id)
        .await
        .map_err(|e| storage_failed("Failed to fetch scheme", &e))?;

    if let Some(scheme) = &scheme {
        if let Err(e) = state.cache.set(&key, scheme).await {
            tracing::warn!("Failed to cache scheme {}: {}", id, e);
        }
    }

    Ok(scheme)
}

/// Public scheme summary
///
/// GET /api/v1/schemes/{id}
async fn get_scheme_summary(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match find_scheme(&state, &id).await {
        Ok(Some(scheme)) => HttpResponse::Ok().json(SchemeSummary {
            id: scheme.id,
            name: scheme.name,
            scheme_type: scheme.scheme_type,
            benefit_summary: scheme.benefit_summary,
        }),
        Ok(None) => not_found(format!("Scheme {} not found", id)),
        Err(response) => response,
    }
}

/// GET /api/v1/admin/schemes
async fn list_schemes(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(response) = authorize_admin(&req, state.admin_api_key.as_deref()) {
        return response;
    }

    match load_schemes(&state).await {
        Ok(schemes) => HttpResponse::Ok().json(schemes),
        Err(e) => storage_failed("Failed to load schemes", &e),
    }
}

/// GET /api/v1/admin/schemes/{id}
async fn get_scheme(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(response) = authorize_admin(&req, state.admin_api_key.as_deref()) {
        return response;
    }
    let id = path.into_inner();

    match find_scheme(&state, &id).await {
        Ok(Some(scheme)) => HttpResponse::Ok().json(scheme),
        Ok(None) => not_found(format!("Scheme {} not found", id)),
        Err(response) => response,
    }
}

/// POST /api/v1/admin/schemes
///
/// Unknown or ill-typed eligibility rule keys are dropped before saving.
async fn create_scheme(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<SchemePayload>,
) -> impl Responder {
    if let Err(response) = authorize_admin(&req, state.admin_api_key.as_deref()) {
        return response;
    }

    let payload = body.into_inner().normalized();
    if let Err(errors) = payload.validate() {
        return validation_failed(&errors);
    }

    match state.postgres.create_scheme(&payload).await {
        Ok(id) => {
            invalidate_schemes(&state, None).await;
            HttpResponse::Created().json(CreatedResponse { id })
        }
        Err(e) => storage_failed("Failed to create scheme", &e),
    }
}

/// PUT /api/v1/admin/schemes/{id}
async fn update_scheme(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<SchemePayload>,
) -> impl Responder {
    if let Err(response) = authorize_admin(&req, state.admin_api_key.as_deref()) {
        return response;
    }
    let id = path.into_inner();

    let payload = body.into_inner().normalized();
    if let Err(errors) = payload.validate() {
        return validation_failed(&errors);
    }

    match state.postgres.update_scheme(&id, &payload).await {
        Ok(true) => {
            invalidate_schemes(&state, Some(&id)).await;
            tracing::info!("Updated scheme {}", id);
            HttpResponse::Ok().json(CreatedResponse { id })
        }
        Ok(false) => not_found(format!("Scheme {} not found", id)),
        Err(e) => storage_failed("Failed to update scheme", &e),
    }
}

/// DELETE /api/v1/admin/schemes/{id}
async fn delete_scheme(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(response) = authorize_admin(&req, state.admin_api_key.as_deref()) {
        return response;
    }
    let id = path.into_inner();

    match state.postgres.delete_scheme(&id).await {
        Ok(true) => {
            invalidate_schemes(&state, Some(&id)).await;
            tracing::info!("Deleted scheme {}", id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => not_found(format!("Scheme {} not found", id)),
        Err(e) => storage_failed("Failed to delete scheme", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_admin_key_accepted() {
        let req = TestRequest::default()
            .insert_header((ADMIN_KEY_HEADER, "secret"))
            .to_http_request();
        assert!(authorize_admin(&req, Some("secret")).is_ok());
    }

    #[test]
    fn test_admin_key_rejected() {
        let wrong = TestRequest::default()
            .insert_header((ADMIN_KEY_HEADER, "guess"))
            .to_http_request();
        let missing = TestRequest::default().to_http_request();

        assert!(authorize_admin(&wrong, Some("secret")).is_err());
        assert!(authorize_admin(&missing, Some("secret")).is_err());
    }

    #[test]
    fn test_unconfigured_key_refuses_everything() {
        let req = TestRequest::default()
            .insert_header((ADMIN_KEY_HEADER, ""))
            .to_http_request();
        assert!(authorize_admin(&req, None).is_err());
        assert!(authorize_admin(&req, Some("")).is_err());
    }
}
