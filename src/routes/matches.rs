use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{MatchSchemesResponse, SavedMatchesResponse, UserQuery};
use crate::routes::{load_schemes, not_found, storage_failed, validation_failed, AppState};

/// Configure per-user match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matches", web::get().to(match_schemes))
        .route("/matches/saved", web::get().to(saved_matches));
}

/// Match the user's stored profile against the catalog and save the snapshot
///
/// GET /api/v1/matches?userId=...
///
/// The previous snapshot is replaced wholesale.
async fn match_schemes(state: web::Data<AppState>, query: web::Query<UserQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(&errors);
    }
    let user_id = &query.user_id;

    let record = match state.postgres.get_profile_record(user_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return not_found("Business profile not found. Complete eligibility first."),
        Err(e) => return storage_failed("Failed to fetch profile", &e),
    };

    let schemes = match load_schemes(&state).await {
        Ok(schemes) => schemes,
        Err(e) => return storage_failed("Failed to load schemes", &e),
    };

    let summary = state.matcher.summarize(&record.profile, schemes);

    if let Err(e) = state.postgres.replace_matches(user_id, &summary.matches).await {
        return storage_failed("Failed to store matches", &e);
    }

    tracing::info!(
        "Matched user {} against {} schemes ({} fully eligible)",
        user_id,
        summary.total_schemes,
        summary.eligible_count
    );

    HttpResponse::Ok().json(MatchSchemesResponse {
        matches: summary.matches,
        total_schemes: summary.total_schemes,
        eligible_count: summary.eligible_count,
    })
}

/// Last stored match snapshot for a user
///
/// GET /api/v1/matches/saved?userId=...
async fn saved_matches(state: web::Data<AppState>, query: web::Query<UserQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(&errors);
    }

    match state.postgres.get_saved_matches(&query.user_id).await {
        Ok(matches) => {
            tracing::debug!("User {} has {} saved matches", query.user_id, matches.len());
            HttpResponse::Ok().json(SavedMatchesResponse {
                user_id: query.user_id.clone(),
                matches,
            })
        }
        Err(e) => storage_failed("Failed to fetch saved matches", &e),
    }
}
