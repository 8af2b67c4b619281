use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutually exclusive entity classification used by scheme rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Micro,
    Small,
    Medium,
    Startup,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Micro => "micro",
            BusinessType::Small => "small",
            BusinessType::Medium => "medium",
            BusinessType::Startup => "startup",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "micro" => Some(BusinessType::Micro),
            "small" => Some(BusinessType::Small),
            "medium" => Some(BusinessType::Medium),
            "startup" => Some(BusinessType::Startup),
            _ => None,
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of support the business is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingGoal {
    Loan,
    Subsidy,
    Grant,
    Any,
}

impl FundingGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingGoal::Loan => "loan",
            FundingGoal::Subsidy => "subsidy",
            FundingGoal::Grant => "grant",
            FundingGoal::Any => "any",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "loan" => Some(FundingGoal::Loan),
            "subsidy" => Some(FundingGoal::Subsidy),
            "grant" => Some(FundingGoal::Grant),
            "any" => Some(FundingGoal::Any),
            _ => None,
        }
    }
}

/// Kind of support a scheme offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingType {
    Loan,
    Subsidy,
    Grant,
}

impl FundingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingType::Loan => "loan",
            FundingType::Subsidy => "subsidy",
            FundingType::Grant => "grant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "loan" => Some(FundingType::Loan),
            "subsidy" => Some(FundingType::Subsidy),
            "grant" => Some(FundingType::Grant),
            _ => None,
        }
    }
}

/// Canonical business profile consumed by the eligibility engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_type: BusinessType,
    pub industry: String,
    pub state: String,
    /// Lakh interval such as "10-50"
    pub turnover_range: String,
    /// Year interval such as "1-3" or "10+"
    pub company_age: String,
    #[serde(default)]
    pub funding_goal: Option<FundingGoal>,
}

impl BusinessProfile {
    /// Funding goal with absence read as unconstrained
    pub fn funding_goal(&self) -> FundingGoal {
        self.funding_goal.unwrap_or(FundingGoal::Any)
    }
}

/// Declarative per-scheme constraints. Absent or empty fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_types: Option<Vec<BusinessType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnover_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnover_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_age_min_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_age_max_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_types: Option<Vec<FundingType>>,
}

impl EligibilityRules {
    /// Build rules from untrusted JSON, keeping only well-typed known keys
    ///
    /// Unknown keys are dropped. A key whose value has the wrong shape is
    /// treated as absent, and unrecognised enum entries inside a list are
    /// skipped.
    pub fn from_value(raw: &serde_json::Value) -> Self {
        let Some(object) = raw.as_object() else {
            return Self::default();
        };

        let strings = |key: &str| -> Option<Vec<String>> {
            object.get(key)?.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
        };
        let number = |key: &str| object.get(key).and_then(serde_json::Value::as_f64);

        Self {
            business_types: strings("business_types")
                .map(|items| items.iter().filter_map(|v| BusinessType::parse(v)).collect()),
            industries: strings("industries"),
            states: strings("states"),
            turnover_min: number("turnover_min"),
            turnover_max: number("turnover_max"),
            company_age_min_years: number("company_age_min_years"),
            company_age_max_years: number("company_age_max_years"),
            funding_types: strings("funding_types")
                .map(|items| items.iter().filter_map(|v| FundingType::parse(v)).collect()),
        }
    }
}

/// Government support scheme with its eligibility rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub scheme_type: FundingType,
    #[serde(default)]
    pub eligibility_rules: EligibilityRules,
    #[serde(default)]
    pub benefit_summary: String,
    #[serde(default)]
    pub states_applicable: Option<Vec<String>>,
    #[serde(default)]
    pub key_benefit_display: Option<String>,
    #[serde(default)]
    pub required_documents: Option<Vec<String>>,
    #[serde(default)]
    pub estimated_timeline: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Outcome of evaluating one profile against one scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub score: u8,
    #[serde(rename = "missingRequirements")]
    pub missing_requirements: Vec<String>,
}

/// Scheme paired with its score for a given profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeMatch {
    pub scheme: Scheme,
    pub score: u8,
    #[serde(rename = "missingRequirements")]
    pub missing_requirements: Vec<String>,
}

impl SchemeMatch {
    /// Eligible when no requirement is left unmet
    pub fn is_eligible(&self) -> bool {
        self.missing_requirements.is_empty()
    }
}

/// Lifecycle of a scheme application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(ApplicationStatus::Draft),
            "submitted" => Some(ApplicationStatus::Submitted),
            "under_review" => Some(ApplicationStatus::UnderReview),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    /// Applicants may only create drafts or submit directly
    pub fn is_initial(&self) -> bool {
        matches!(self, ApplicationStatus::Draft | ApplicationStatus::Submitted)
    }

    /// Number of tracker steps completed, `None` once rejected
    ///
    /// Steps are eligibility, documents, bank review, approval and disbursal.
    pub fn tracker_step(&self) -> Option<u8> {
        match self {
            ApplicationStatus::Draft => Some(0),
            ApplicationStatus::Submitted => Some(1),
            ApplicationStatus::UnderReview => Some(2),
            ApplicationStatus::Approved => Some(5),
            ApplicationStatus::Rejected => None,
        }
    }
}

/// A user's application to one scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub scheme_id: String,
    /// Joined from the scheme catalog on reads
    #[serde(default)]
    pub scheme_name: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Persisted match snapshot row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSchemeMatch {
    pub user_id: String,
    pub scheme_id: String,
    pub match_score: u8,
    pub missing_requirements: Vec<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Questionnaire branch chosen at the gateway question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Startup,
    Msme,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Startup => "startup",
            EntityType::Msme => "msme",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "startup" => Some(EntityType::Startup),
            "msme" => Some(EntityType::Msme),
            _ => None,
        }
    }
}

/// Penalty applied per failed rule dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Penalties {
    pub business_type: u8,
    pub industry: u8,
    pub state: u8,
    pub turnover: u8,
    pub company_age: u8,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            business_type: 25,
            industry: 20,
            state: 25,
            turnover: 15,
            company_age: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rules_from_value_drops_unknown_keys() {
        let rules = EligibilityRules::from_value(&json!({
            "business_types": ["micro", "huge", "startup"],
            "turnover_max": 500,
            "turnover_min": "ten",
            "min_employees": 5,
            "states": "Gujarat"
        }));

        assert_eq!(
            rules.business_types,
            Some(vec![BusinessType::Micro, BusinessType::Startup])
        );
        assert_eq!(rules.turnover_max, Some(500.0));
        assert_eq!(rules.turnover_min, None);
        assert_eq!(rules.states, None);
    }

    #[test]
    fn test_rules_from_non_object() {
        assert_eq!(EligibilityRules::from_value(&json!(null)), EligibilityRules::default());
        assert_eq!(EligibilityRules::from_value(&json!([1, 2])), EligibilityRules::default());
    }

    #[test]
    fn test_empty_rules_serialize_to_empty_object() {
        let value = serde_json::to_value(EligibilityRules::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_profile_funding_goal_defaults_to_any() {
        let profile = BusinessProfile {
            business_type: BusinessType::Micro,
            industry: "Services".to_string(),
            state: "Other".to_string(),
            turnover_range: "0-100".to_string(),
            company_age: "1-3".to_string(),
            funding_goal: None,
        };
        assert_eq!(profile.funding_goal(), FundingGoal::Any);
    }

    #[test]
    fn test_match_eligibility_follows_missing_requirements() {
        let scheme: Scheme = serde_json::from_value(json!({
            "id": "s1",
            "name": "Seed grant",
            "type": "grant"
        }))
        .unwrap();

        let unmet = SchemeMatch {
            scheme: scheme.clone(),
            score: 100,
            missing_requirements: vec!["Industry must be one of: Technology".to_string()],
        };
        assert!(!unmet.is_eligible());

        let met = SchemeMatch {
            scheme,
            score: 100,
            missing_requirements: Vec::new(),
        };
        assert!(met.is_eligible());
    }

    #[test]
    fn test_application_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ApplicationStatus::UnderReview).unwrap(),
            json!("under_review")
        );
        assert_eq!(ApplicationStatus::parse("Under_Review"), Some(ApplicationStatus::UnderReview));
        assert_eq!(ApplicationStatus::parse("pending"), None);
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Draft);
    }

    #[test]
    fn test_application_status_tracker() {
        assert!(ApplicationStatus::Submitted.is_initial());
        assert!(!ApplicationStatus::Approved.is_initial());
        assert_eq!(ApplicationStatus::Draft.tracker_step(), Some(0));
        assert_eq!(ApplicationStatus::Approved.tracker_step(), Some(5));
        assert_eq!(ApplicationStatus::Rejected.tracker_step(), None);
    }
}
