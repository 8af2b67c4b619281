use actix_web::{web, HttpResponse, Responder};

use crate::models::QuestionnaireResponse;
use crate::questionnaire::{
    GATEWAY_QUESTION, LEGACY_QUESTIONS, MSME_QUESTIONS, STARTUP_QUESTIONS, STEP2_QUESTIONS,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/questionnaire", web::get().to(get_questionnaire));
}

/// Every question flow with its option vocabulary
///
/// GET /api/v1/questionnaire
async fn get_questionnaire() -> impl Responder {
    HttpResponse::Ok().json(QuestionnaireResponse {
        gateway: GATEWAY_QUESTION,
        startup: STARTUP_QUESTIONS,
        msme: MSME_QUESTIONS,
        legacy: LEGACY_QUESTIONS,
        step2: STEP2_QUESTIONS,
    })
}
