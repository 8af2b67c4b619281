use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::derive_profile;
use crate::models::{
    ClaimProfileRequest, ClaimProfileResponse, EntityType, PreviewMatchesRequest,
    PreviewMatchesResponse, ProfileSummaryResponse, RawAnswers, SubmitProfileRequest,
    SubmitProfileResponse, UpdateProfileRequest, UserQuery,
};
use crate::questionnaire::build_summary_rows;
use crate::routes::{bad_request, load_schemes, not_found, storage_failed, validation_failed, AppState};
use crate::services::ProfileRecord;

/// Configure questionnaire submission and profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/eligibility/preview-matches", web::post().to(preview_matches))
        .route("/eligibility/submit", web::post().to(submit_profile))
        .route("/profiles", web::put().to(update_profile))
        .route("/profiles/claim", web::post().to(claim_profile))
        .route("/profiles/summary", web::get().to(profile_summary));
}

fn entity_type_of(answers: &RawAnswers) -> Option<EntityType> {
    match answers {
        RawAnswers::Startup(_) => Some(EntityType::Startup),
        RawAnswers::Msme(_) => Some(EntityType::Msme),
        RawAnswers::Legacy(_) => None,
    }
}

/// Derive a profile and score it against the catalog without saving anything
///
/// POST /api/v1/eligibility/preview-matches
async fn preview_matches(
    state: web::Data<AppState>,
    req: web::Json<PreviewMatchesRequest>,
) -> impl Responder {
    let answers = req.raw_answers();
    if let Err(errors) = answers.validate() {
        tracing::info!("Rejected preview answers: {}", errors);
        return validation_failed(&errors);
    }

    let profile = derive_profile(&answers);
    tracing::debug!("Derived preview profile: {:?}", profile);

    let schemes = match load_schemes(&state).await {
        Ok(schemes) => schemes,
        Err(e) => return storage_failed("Failed to load schemes", &e),
    };

    let matches = state.matcher.match_schemes(&profile, schemes);
    tracing::info!(
        "Previewed {} schemes for a {} profile in {}",
        matches.len(),
        profile.business_type,
        profile.state
    );

    HttpResponse::Ok().json(PreviewMatchesResponse {
        matches,
        derived_profile: profile,
    })
}

/// Derive and save a profile for a user, or against an email awaiting verification
///
/// POST /api/v1/eligibility/submit
///
/// The profile is always re-derived from the submitted answers.
async fn submit_profile(
    state: web::Data<AppState>,
    req: web::Json<SubmitProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let answers = req.answers.raw_answers();
    if let Err(errors) = answers.validate() {
        tracing::info!("Rejected submitted answers: {}", errors);
        return validation_failed(&errors);
    }
    if let Some(Err(errors)) = req.step2.as_ref().map(|step2| step2.validate()) {
        return validation_failed(&errors);
    }

    let record = ProfileRecord {
        profile: derive_profile(&answers),
        entity_type: entity_type_of(&answers),
        questionnaire_responses: req.answers.questionnaire_responses(),
        step2_responses: req.step2.as_ref().and_then(|step2| serde_json::to_value(step2).ok()),
    };

    let user_id = req.user_id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    let email = req.email.as_deref().map(str::trim).filter(|email| !email.is_empty());

    let (result, pending) = match (user_id, email) {
        (Some(user_id), _) => {
            tracing::info!("Saving business profile for user {}", user_id);
            (state.postgres.upsert_business_profile(user_id, &record).await, false)
        }
        (None, Some(email)) => {
            tracing::info!("Saving pending profile for unverified email");
            (state.postgres.upsert_pending_profile(email, &record).await, true)
        }
        (None, None) => return bad_request("Email is required"),
    };

    if let Err(e) = result {
        return storage_failed("Failed to save profile", &e);
    }

    HttpResponse::Ok().json(SubmitProfileResponse {
        ok: true,
        pending,
        profile: record.profile,
    })
}

/// Save profile fields edited directly by a verified user
///
/// PUT /api/v1/profiles
///
/// Stored questionnaire answers are left untouched.
async fn update_profile(
    state: web::Data<AppState>,
    body: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let req = body.into_inner().normalized();
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let record = ProfileRecord {
        profile: req.profile(),
        entity_type: None,
        questionnaire_responses: None,
        step2_responses: None,
    };

    if let Err(e) = state.postgres.upsert_business_profile(&req.user_id, &record).await {
        return storage_failed("Failed to save profile", &e);
    }

    tracing::info!("Updated business profile fields for user {}", req.user_id);
    HttpResponse::Ok().json(SubmitProfileResponse {
        ok: true,
        pending: false,
        profile: record.profile,
    })
}

/// Move a pending profile onto a newly verified user
///
/// POST /api/v1/profiles/claim
async fn claim_profile(
    state: web::Data<AppState>,
    req: web::Json<ClaimProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    match state.postgres.claim_pending_profile(&req.user_id, &req.email).await {
        Ok(claimed) => {
            tracing::info!("Profile claim for user {}: claimed={}", req.user_id, claimed);
            HttpResponse::Ok().json(ClaimProfileResponse { claimed })
        }
        Err(e) => storage_failed("Failed to claim profile", &e),
    }
}

/// Stored questionnaire answers rendered as title/label rows
///
/// GET /api/v1/profiles/summary?userId=...
async fn profile_summary(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(&errors);
    }

    let record = match state.postgres.get_profile_record(&query.user_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return not_found("Business profile not found. Complete eligibility first."),
        Err(e) => return storage_failed("Failed to fetch profile", &e),
    };

    let rows = build_summary_rows(
        record.entity_type,
        record.questionnaire_responses.as_ref().and_then(|v| v.as_object()),
        record.step2_responses.as_ref().and_then(|v| v.as_object()),
    );

    HttpResponse::Ok().json(ProfileSummaryResponse {
        user_id: query.user_id.clone(),
        entity_type: record.entity_type,
        profile: record.profile,
        rows,
    })
}
