use crate::core::tables::{self, lookup};
use crate::models::{
    BusinessProfile, BusinessType, FundingGoal, LegacyAnswers, MsmeAnswers, RawAnswers,
    StartupAnswers,
};
use crate::questionnaire::{find_question, STARTUP_QUESTIONS};

/// Derive a canonical profile from whichever questionnaire variant was completed
///
/// Total over its input: missing or unrecognized answers fall back to the
/// documented defaults and every profile field is populated.
pub fn derive_profile(answers: &RawAnswers) -> BusinessProfile {
    match answers {
        RawAnswers::Legacy(answers) => derive_from_legacy_flow(answers),
        RawAnswers::Startup(answers) => derive_from_startup_flow(answers),
        RawAnswers::Msme(answers) => derive_from_msme_flow(answers),
    }
}

/// Legacy flat flow
///
/// Startup recognition (`dpiit` or `both`) always wins over the turnover
/// classification.
pub fn derive_from_legacy_flow(answers: &LegacyAnswers) -> BusinessProfile {
    let turnover = answers
        .turnover
        .as_deref()
        .filter(|t| lookup(tables::TURNOVER_RANGE, Some(*t)).is_some())
        .unwrap_or(tables::DEFAULT_TURNOVER_BRACKET);

    let business_type = lookup(tables::STARTUP_RECOGNITION, answers.recognition_status.as_deref())
        .unwrap_or_else(|| business_type_from_turnover(turnover));

    let industry = lookup(tables::SECTOR_INDUSTRY, answers.sector.as_deref())
        .unwrap_or(tables::DEFAULT_INDUSTRY);

    let turnover_range = lookup(tables::TURNOVER_RANGE, Some(turnover))
        .unwrap_or(tables::DEFAULT_TURNOVER_RANGE);

    let company_age = lookup(tables::ACTIVE_YEAR_AGE, answers.active_year.as_deref())
        .unwrap_or(tables::DEFAULT_COMPANY_AGE);

    // Only the first pick counts even though two are collected.
    let funding_goal = lookup(
        tables::SUPPORT_FUNDING_GOAL,
        answers.support_types.first().map(String::as_str),
    )
    .unwrap_or(FundingGoal::Any);

    BusinessProfile {
        business_type,
        industry: industry.to_string(),
        state: normalize_state(answers.state.as_deref()),
        turnover_range: turnover_range.to_string(),
        company_age: company_age.to_string(),
        funding_goal: Some(funding_goal),
    }
}

/// Startup branch. The gateway already fixed the entity type.
pub fn derive_from_startup_flow(answers: &StartupAnswers) -> BusinessProfile {
    // Capital requirement stands in for turnover on this branch.
    let turnover_range = lookup(tables::CAPITAL_RANGE, answers.capital_requirement.as_deref())
        .unwrap_or(tables::DEFAULT_CAPITAL_RANGE);

    let industry = lookup(tables::SECTOR_FOCUS_INDUSTRY, answers.sector_focus.as_deref())
        .unwrap_or(tables::DEFAULT_STARTUP_INDUSTRY);

    let funding_goal = lookup(
        tables::PREFERENCE_FUNDING_GOAL,
        answers.grant_vs_equity_preference.as_deref(),
    )
    .unwrap_or(FundingGoal::Any);

    let company_age = answers
        .startup_age
        .as_deref()
        .filter(|age| {
            find_question(STARTUP_QUESTIONS, "startup_age").is_some_and(|q| q.accepts(age))
        })
        .unwrap_or(tables::DEFAULT_COMPANY_AGE);

    BusinessProfile {
        business_type: BusinessType::Startup,
        industry: industry.to_string(),
        state: tables::DEFAULT_STATE.to_string(),
        turnover_range: turnover_range.to_string(),
        company_age: company_age.to_string(),
        funding_goal: Some(funding_goal),
    }
}

/// MSME branch
///
/// An explicit Udyam class wins; unregistered businesses are classified by
/// turnover. Company age is not asked on this branch and stays at the default.
pub fn derive_from_msme_flow(answers: &MsmeAnswers) -> BusinessProfile {
    let turnover = answers
        .annual_turnover
        .as_deref()
        .filter(|t| lookup(tables::TURNOVER_RANGE, Some(*t)).is_some())
        .unwrap_or(tables::DEFAULT_TURNOVER_BRACKET);

    let business_type = lookup(tables::UDYAM_BUSINESS_TYPE, answers.udyam_classification.as_deref())
        .unwrap_or_else(|| business_type_from_turnover(turnover));

    let turnover_range = lookup(tables::TURNOVER_RANGE, Some(turnover))
        .unwrap_or(tables::DEFAULT_TURNOVER_RANGE);

    let industry = lookup(tables::ACTIVITY_INDUSTRY, answers.nature_of_business_activity.as_deref())
        .unwrap_or(tables::DEFAULT_INDUSTRY);

    let funding_goal = lookup(
        tables::SUBVENTION_FUNDING_GOAL,
        answers.interest_subvention_requirement.as_deref(),
    )
    .unwrap_or(FundingGoal::Any);

    BusinessProfile {
        business_type,
        industry: industry.to_string(),
        state: tables::DEFAULT_STATE.to_string(),
        turnover_range: turnover_range.to_string(),
        company_age: tables::DEFAULT_COMPANY_AGE.to_string(),
        funding_goal: Some(funding_goal),
    }
}

#[inline]
fn business_type_from_turnover(turnover: &str) -> BusinessType {
    lookup(tables::TURNOVER_BUSINESS_TYPE, Some(turnover)).unwrap_or(BusinessType::Micro)
}

fn normalize_state(state: Option<&str>) -> String {
    match state.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => tables::DEFAULT_STATE.to_string(),
    }
}
