use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::questionnaire::{
    check_multi, check_single, find_question, Question, LEGACY_QUESTIONS, MSME_QUESTIONS, STARTUP_QUESTIONS,
    STEP2_QUESTIONS,
};

/// Raw answers from the legacy flat questionnaire. Every key may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyAnswers {
    pub legal_entity_type: Option<String>,
    pub active_year: Option<String>,
    pub recognition_status: Option<String>,
    pub turnover: Option<String>,
    pub sector: Option<String>,
    pub sub_sector: Option<String>,
    pub state: Option<String>,
    pub location_advantage: Option<String>,
    pub ownership_category: Option<String>,
    pub stage: Option<String>,
    pub support_types: Vec<String>,
    pub funding_amount: Option<String>,
    pub compliance_readiness: Option<String>,
    pub innovation_ip_export: Option<String>,
}

/// Raw answers from the Startup branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupAnswers {
    pub dpiit_recognition_status: Option<String>,
    pub startup_age: Option<String>,
    pub innovation_type: Option<String>,
    pub technology_ip_orientation: Option<String>,
    pub sector_focus: Option<String>,
    pub funding_stage: Option<String>,
    pub capital_requirement: Option<String>,
    pub grant_vs_equity_preference: Option<String>,
    pub incubation_accelerator_status: Option<String>,
    pub fund_of_funds_aif_openness: Option<String>,
    pub export_global_market_focus: Option<String>,
    pub strategic_social_impact_alignment: Option<String>,
}

/// Raw answers from the MSME branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsmeAnswers {
    pub udyam_classification: Option<String>,
    pub annual_turnover: Option<String>,
    pub investment_plant_machinery: Option<String>,
    pub nature_of_business_activity: Option<String>,
    pub location_district_incentives: Option<String>,
    pub state_industrial_policy_coverage: Option<String>,
    pub credit_exposure_status: Option<String>,
    pub interest_subvention_requirement: Option<String>,
    pub capex_technology_upgradation_plan: Option<String>,
    pub export_activity_status: Option<String>,
    pub quality_compliance_certifications: Option<String>,
    pub employment_intensity: Option<String>,
}

/// Optional extended answers collected after the first results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step2Answers {
    pub registered_in_india: Option<String>,
    pub operational_status: Option<String>,
    pub dpiit_detail: Option<String>,
    pub udyam_detail: Option<String>,
    pub investment_pm: Option<String>,
    pub msme_classification: Option<String>,
    pub export_orientation: Option<String>,
    pub special_region: Option<String>,
    pub first_gen_entrepreneur: Option<String>,
    pub timeline_requirement: Option<String>,
    pub existing_bank_loan: Option<String>,
    pub cibil_score: Option<String>,
    pub collateral: Option<String>,
    pub gst_registered: Option<String>,
    pub itr_available: Option<String>,
    pub patent_status: Option<String>,
    pub incubated: Option<String>,
}

/// Answer bundle from whichever questionnaire variant was completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswers {
    Legacy(LegacyAnswers),
    Startup(StartupAnswers),
    Msme(MsmeAnswers),
}

impl Validate for RawAnswers {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            RawAnswers::Legacy(answers) => answers.validate(),
            RawAnswers::Startup(answers) => answers.validate(),
            RawAnswers::Msme(answers) => answers.validate(),
        }
    }
}

fn check_key(errors: &mut ValidationErrors, flow: &[Question], key: &str, value: Option<&str>) {
    if let Some(question) = find_question(flow, key) {
        check_single(errors, question, value);
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

macro_rules! check_fields {
    ($errors:ident, $flow:expr, $answers:ident, [$($field:ident),* $(,)?]) => {
        $(
            check_key(&mut $errors, $flow, stringify!($field), $answers.$field.as_deref());
        )*
    };
}

impl Validate for LegacyAnswers {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let answers = self;
        check_fields!(errors, LEGACY_QUESTIONS, answers, [
            legal_entity_type,
            active_year,
            recognition_status,
            turnover,
            sector,
            sub_sector,
            state,
            location_advantage,
            ownership_category,
            stage,
            funding_amount,
            compliance_readiness,
            innovation_ip_export,
        ]);
        if let Some(support) = find_question(LEGACY_QUESTIONS, "support_types") {
            check_multi(&mut errors, support, &self.support_types);
        }
        finish(errors)
    }
}

impl Validate for StartupAnswers {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let answers = self;
        check_fields!(errors, STARTUP_QUESTIONS, answers, [
            dpiit_recognition_status,
            startup_age,
            innovation_type,
            technology_ip_orientation,
            sector_focus,
            funding_stage,
            capital_requirement,
            grant_vs_equity_preference,
            incubation_accelerator_status,
            fund_of_funds_aif_openness,
            export_global_market_focus,
            strategic_social_impact_alignment,
        ]);
        finish(errors)
    }
}

impl Validate for MsmeAnswers {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let answers = self;
        check_fields!(errors, MSME_QUESTIONS, answers, [
            udyam_classification,
            annual_turnover,
            investment_plant_machinery,
            nature_of_business_activity,
            location_district_incentives,
            state_industrial_policy_coverage,
            credit_exposure_status,
            interest_subvention_requirement,
            capex_technology_upgradation_plan,
            export_activity_status,
            quality_compliance_certifications,
            employment_intensity,
        ]);
        finish(errors)
    }
}

impl Validate for Step2Answers {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let answers = self;
        check_fields!(errors, STEP2_QUESTIONS, answers, [
            registered_in_india,
            operational_status,
            dpiit_detail,
            udyam_detail,
            investment_pm,
            msme_classification,
            export_orientation,
            special_region,
            first_gen_entrepreneur,
            timeline_requirement,
            existing_bank_loan,
            cibil_score,
            collateral,
            gst_registered,
            itr_available,
            patent_status,
            incubated,
        ]);
        finish(errors)
    }
}
