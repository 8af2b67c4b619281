use serde::{Deserialize, Serialize};

use crate::models::domain::{
    Application, BusinessProfile, EntityType, FundingType, SchemeMatch, UserSchemeMatch,
};
use crate::questionnaire::{Question, SummaryRow};

/// Response for the preview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewMatchesResponse {
    pub matches: Vec<SchemeMatch>,
    #[serde(rename = "derivedProfile")]
    pub derived_profile: BusinessProfile,
}

/// Response for the per-user match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSchemesResponse {
    pub matches: Vec<SchemeMatch>,
    pub total_schemes: usize,
    pub eligible_count: usize,
}

/// Response after a profile has been saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitProfileResponse {
    pub ok: bool,
    /// True when the profile was stored against an unverified email
    pub pending: bool,
    pub profile: BusinessProfile,
}

/// Last persisted match snapshot for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMatchesResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub matches: Vec<UserSchemeMatch>,
}

/// Pending profile claim outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimProfileResponse {
    pub claimed: bool,
}

/// Stored profile rendered as questionnaire title/label rows
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "entityType")]
    pub entity_type: Option<EntityType>,
    pub profile: BusinessProfile,
    pub rows: Vec<SummaryRow>,
}

/// Public scheme summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub scheme_type: FundingType,
    pub benefit_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Applications owned by a user, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub applications: Vec<Application>,
}

/// One application with its tracker position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDetailResponse {
    #[serde(flatten)]
    pub application: Application,
    #[serde(rename = "trackerStep")]
    pub tracker_step: Option<u8>,
}

/// Every question flow, for rendering the questionnaire
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub gateway: Question,
    pub startup: &'static [Question],
    pub msme: &'static [Question],
    pub legacy: &'static [Question],
    pub step2: &'static [Question],
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
