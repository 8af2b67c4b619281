use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::answers::{LegacyAnswers, MsmeAnswers, RawAnswers, StartupAnswers, Step2Answers};
use crate::models::domain::{
    ApplicationStatus, BusinessProfile, BusinessType, EligibilityRules, EntityType, FundingGoal,
    FundingType,
};

/// Questionnaire answers in any of the accepted shapes
///
/// New clients send `entityType` with a matching `startup` or `msme` object;
/// older clients send the legacy flat fields at the top level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswersPayload {
    #[serde(rename = "entityType", default)]
    pub entity_type: Option<EntityType>,
    #[serde(default)]
    pub startup: Option<StartupAnswers>,
    #[serde(default)]
    pub msme: Option<MsmeAnswers>,
    #[serde(flatten)]
    pub legacy: LegacyAnswers,
}

impl AnswersPayload {
    /// Pick the answer variant to derive from, falling back to the legacy flow
    pub fn raw_answers(&self) -> RawAnswers {
        match (self.entity_type, &self.startup, &self.msme) {
            (Some(EntityType::Startup), Some(startup), _) => RawAnswers::Startup(startup.clone()),
            (Some(EntityType::Msme), _, Some(msme)) => RawAnswers::Msme(msme.clone()),
            _ => RawAnswers::Legacy(self.legacy.clone()),
        }
    }

    /// Responses to store next to the derived profile
    pub fn questionnaire_responses(&self) -> Option<serde_json::Value> {
        match self.raw_answers() {
            RawAnswers::Startup(answers) => serde_json::to_value(answers).ok(),
            RawAnswers::Msme(answers) => serde_json::to_value(answers).ok(),
            RawAnswers::Legacy(_) => None,
        }
    }
}

/// Request to preview matches without persisting anything
pub type PreviewMatchesRequest = AnswersPayload;

/// Request to save a derived profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitProfileRequest {
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub step2: Option<Step2Answers>,
    #[serde(flatten)]
    pub answers: AnswersPayload,
}

/// Request to move a pending profile onto a verified user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClaimProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(email)]
    pub email: String,
}

/// Query identifying the user whose matches are requested
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Profile fields edited directly, bypassing the questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub business_type: BusinessType,
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub turnover_range: String,
    #[validate(length(min = 1))]
    pub company_age: String,
    #[serde(default)]
    pub funding_goal: Option<FundingGoal>,
}

impl UpdateProfileRequest {
    /// Trim the free-text fields so blank values fail validation
    pub fn normalized(mut self) -> Self {
        self.user_id = self.user_id.trim().to_string();
        self.industry = self.industry.trim().to_string();
        self.state = self.state.trim().to_string();
        self.turnover_range = self.turnover_range.trim().to_string();
        self.company_age = self.company_age.trim().to_string();
        self
    }

    pub fn profile(&self) -> BusinessProfile {
        BusinessProfile {
            business_type: self.business_type,
            industry: self.industry.clone(),
            state: self.state.clone(),
            turnover_range: self.turnover_range.clone(),
            company_age: self.company_age.clone(),
            funding_goal: self.funding_goal,
        }
    }
}

/// Request to open an application for a scheme
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub scheme_id: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub bank_name: Option<String>,
}

impl CreateApplicationRequest {
    pub fn normalized(mut self) -> Self {
        self.user_id = self.user_id.trim().to_string();
        self.scheme_id = self.scheme_id.trim().to_string();
        self.bank_name = non_blank(self.bank_name);
        self
    }
}

/// Scheme fields accepted by the admin endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SchemePayload {
    #[validate(length(min = 1, max = 300))]
    pub name: String,
    #[serde(rename = "type")]
    pub scheme_type: FundingType,
    #[serde(default)]
    pub benefit_summary: String,
    #[serde(default)]
    pub eligibility_rules: serde_json::Value,
    #[serde(default)]
    pub states_applicable: Option<Vec<String>>,
    #[serde(default)]
    pub key_benefit_display: Option<String>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub estimated_timeline: Option<String>,
}

impl SchemePayload {
    /// Trim text fields and turn blank optionals into `None`
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.benefit_summary = self.benefit_summary.trim().to_string();
        self.key_benefit_display = non_blank(self.key_benefit_display);
        self.estimated_timeline = non_blank(self.estimated_timeline);
        self
    }

    /// Eligibility rules with unknown or ill-typed keys dropped
    pub fn rules(&self) -> EligibilityRules {
        EligibilityRules::from_value(&self.eligibility_rules)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
