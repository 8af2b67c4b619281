//! Answer-to-profile lookup tables
//!
//! Each business rule that maps one vocabulary onto another lives here as an
//! explicit table so it can be audited and tested on its own.

use crate::models::{BusinessType, FundingGoal};

pub type Table<V> = &'static [(&'static str, V)];

/// Look up `key` in `table`, treating a missing key as absent
#[inline]
pub fn lookup<V: Copy>(table: Table<V>, key: Option<&str>) -> Option<V> {
    let key = key?;
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Turnover bracket to lakh interval (legacy and MSME flows)
pub const TURNOVER_RANGE: Table<&str> = &[
    ("pre_revenue", "0-0"),
    ("under_1cr", "0-100"),
    ("1_5cr", "100-500"),
    ("5_50cr", "500-5000"),
    ("50_250cr", "5000-25000"),
    ("over_250cr", "25000-99999"),
];

pub const DEFAULT_TURNOVER_BRACKET: &str = "under_1cr";
pub const DEFAULT_TURNOVER_RANGE: &str = "0-100";

/// Turnover bracket to MSME size class when registration gives no answer
pub const TURNOVER_BUSINESS_TYPE: Table<BusinessType> = &[
    ("pre_revenue", BusinessType::Micro),
    ("under_1cr", BusinessType::Micro),
    ("1_5cr", BusinessType::Small),
    ("5_50cr", BusinessType::Medium),
    ("50_250cr", BusinessType::Medium),
    ("over_250cr", BusinessType::Medium),
];

/// Legacy recognition statuses that mark the business as a startup
pub const STARTUP_RECOGNITION: Table<BusinessType> = &[
    ("dpiit", BusinessType::Startup),
    ("both", BusinessType::Startup),
];

/// Legacy sector to industry
pub const SECTOR_INDUSTRY: Table<&str> = &[
    ("agriculture_food", "Agriculture"),
    ("manufacturing", "Manufacturing"),
    ("services", "Services"),
    ("technology_saas", "Technology"),
    ("deeptech_rd", "Technology"),
    ("trading", "Trading"),
];

pub const DEFAULT_INDUSTRY: &str = "Services";

/// Legacy incorporation year to company age bracket
pub const ACTIVE_YEAR_AGE: Table<&str> = &[
    ("2024", "0-1"),
    ("2023", "0-1"),
    ("2022", "1-3"),
    ("2021", "1-3"),
    ("2020", "3-5"),
    ("2019", "3-5"),
    ("2018", "3-5"),
    ("2015-2017", "5-10"),
    ("2010-2014", "5-10"),
    ("before_2010", "10+"),
];

pub const DEFAULT_COMPANY_AGE: &str = "1-3";

/// First legacy support pick to funding goal
pub const SUPPORT_FUNDING_GOAL: Table<FundingGoal> = &[
    ("grant_subsidy", FundingGoal::Grant),
    ("interest_subsidy", FundingGoal::Subsidy),
    ("collateral_free_loan", FundingGoal::Loan),
    ("bank_loan", FundingGoal::Loan),
    ("equity_seed", FundingGoal::Loan),
    ("export_market", FundingGoal::Any),
    ("patent_ip", FundingGoal::Any),
];

/// Startup capital requirement reused as a turnover-shaped size proxy
pub const CAPITAL_RANGE: Table<&str> = &[
    ("under_10l", "0-10"),
    ("10_50l", "10-50"),
    ("50l_2cr", "50-200"),
    ("2_10cr", "200-1000"),
    ("over_10cr", "1000-5000"),
];

pub const DEFAULT_CAPITAL_RANGE: &str = "0-10";

/// Startup sector focus to industry
pub const SECTOR_FOCUS_INDUSTRY: Table<&str> = &[
    ("technology_saas", "Technology"),
    ("deeptech_rd", "Technology"),
    ("fintech_edtech", "Technology"),
    ("manufacturing", "Manufacturing"),
    ("agriculture_food", "Agriculture"),
    ("healthcare", "Healthcare"),
    ("other", "Services"),
];

pub const DEFAULT_STARTUP_INDUSTRY: &str = "Technology";

/// Startup grant/equity preference to funding goal
pub const PREFERENCE_FUNDING_GOAL: Table<FundingGoal> = &[
    ("grant", FundingGoal::Grant),
    ("debt", FundingGoal::Loan),
    ("equity", FundingGoal::Any),
    ("both", FundingGoal::Any),
];

/// Udyam registration class; `not_registered` is deliberately absent
pub const UDYAM_BUSINESS_TYPE: Table<BusinessType> = &[
    ("micro", BusinessType::Micro),
    ("small", BusinessType::Small),
    ("medium", BusinessType::Medium),
];

/// MSME nature of activity to industry
pub const ACTIVITY_INDUSTRY: Table<&str> = &[
    ("manufacturing", "Manufacturing"),
    ("services", "Services"),
    ("trading", "Trading"),
    ("mixed", "Services"),
];

/// MSME interest subvention answer to funding goal
pub const SUBVENTION_FUNDING_GOAL: Table<FundingGoal> = &[
    ("yes", FundingGoal::Subsidy),
    ("prefer", FundingGoal::Subsidy),
    ("no", FundingGoal::Any),
];

pub const DEFAULT_STATE: &str = "Other";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{find_question, LEGACY_QUESTIONS, MSME_QUESTIONS, STARTUP_QUESTIONS};

    fn assert_keys_in_catalog<V>(table: Table<V>, flow: &[crate::questionnaire::Question], key: &str) {
        let question = find_question(flow, key).unwrap();
        for (value, _) in table {
            assert!(question.accepts(value), "{value} is not an option of {key}");
        }
    }

    #[test]
    fn test_tables_use_catalog_vocabulary() {
        assert_keys_in_catalog(TURNOVER_RANGE, LEGACY_QUESTIONS, "turnover");
        assert_keys_in_catalog(TURNOVER_RANGE, MSME_QUESTIONS, "annual_turnover");
        assert_keys_in_catalog(SECTOR_INDUSTRY, LEGACY_QUESTIONS, "sector");
        assert_keys_in_catalog(ACTIVE_YEAR_AGE, LEGACY_QUESTIONS, "active_year");
        assert_keys_in_catalog(SUPPORT_FUNDING_GOAL, LEGACY_QUESTIONS, "support_types");
        assert_keys_in_catalog(CAPITAL_RANGE, STARTUP_QUESTIONS, "capital_requirement");
        assert_keys_in_catalog(SECTOR_FOCUS_INDUSTRY, STARTUP_QUESTIONS, "sector_focus");
        assert_keys_in_catalog(PREFERENCE_FUNDING_GOAL, STARTUP_QUESTIONS, "grant_vs_equity_preference");
        assert_keys_in_catalog(UDYAM_BUSINESS_TYPE, MSME_QUESTIONS, "udyam_classification");
        assert_keys_in_catalog(ACTIVITY_INDUSTRY, MSME_QUESTIONS, "nature_of_business_activity");
        assert_keys_in_catalog(SUBVENTION_FUNDING_GOAL, MSME_QUESTIONS, "interest_subvention_requirement");
    }

    #[test]
    fn test_lookup_absent_and_unknown() {
        assert_eq!(lookup(TURNOVER_RANGE, Some("1_5cr")), Some("100-500"));
        assert_eq!(lookup(TURNOVER_RANGE, Some("gazillions")), None);
        assert_eq!(lookup(TURNOVER_RANGE, None), None);
    }
}
