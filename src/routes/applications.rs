use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ApplicationDetailResponse, ApplicationsResponse, CreateApplicationRequest, CreatedResponse,
    UserQuery,
};
use crate::routes::{bad_request, not_found, storage_failed, validation_failed, AppState};

/// Configure scheme application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/applications")
                .route(web::get().to(list_applications))
                .route(web::post().to(create_application)),
        )
        .route("/applications/{id}", web::get().to(get_application));
}

/// Open an application for a scheme as a draft or submitted directly
///
/// POST /api/v1/applications
async fn create_application(
    state: web::Data<AppState>,
    body: web::Json<CreateApplicationRequest>,
) -> impl Responder {
    let req = body.into_inner().normalized();
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }
    if !req.status.is_initial() {
        return bad_request(format!(
            "New applications must be draft or submitted, not {}",
            req.status.as_str()
        ));
    }

    let created = state
        .postgres
        .create_application(&req.user_id, &req.scheme_id, req.status, req.bank_name.as_deref())
        .await;

    match created {
        Ok(Some(id)) => HttpResponse::Created().json(CreatedResponse { id }),
        Ok(None) => not_found(format!("Scheme {} not found", req.scheme_id)),
        Err(e) => storage_failed("Failed to create application", &e),
    }
}

/// GET /api/v1/applications?userId=...
async fn list_applications(state: web::Data<AppState>, query: web::Query<UserQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(&errors);
    }

    match state.postgres.list_applications(&query.user_id).await {
        Ok(applications) => {
            tracing::debug!("User {} has {} applications", query.user_id, applications.len());
            HttpResponse::Ok().json(ApplicationsResponse {
                user_id: query.user_id.clone(),
                applications,
            })
        }
        Err(e) => storage_failed("Failed to fetch applications", &e),
    }
}

/// One application with its tracker step
///
/// GET /api/v1/applications/{id}?userId=...
///
/// Applications owned by another user read as not found.
async fn get_application(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(&errors);
    }
    let id = path.into_inner();

    match state.postgres.get_application(&query.user_id, &id).await {
        Ok(Some(application)) => HttpResponse::Ok().json(ApplicationDetailResponse {
            tracker_step: application.status.tracker_step(),
            application,
        }),
        Ok(None) => not_found(format!("Application {} not found", id)),
        Err(e) => storage_failed("Failed to fetch application", &e),
    }
}
