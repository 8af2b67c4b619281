use crate::core::ranges::range_midpoint;
use crate::models::{BusinessProfile, Eligibility, Penalties, Scheme};

/// Score a profile against one scheme with the default penalties
pub fn evaluate_eligibility(profile: &BusinessProfile, scheme: &Scheme) -> Eligibility {
    evaluate_with_penalties(profile, scheme, &Penalties::default())
}

/// Score a profile against one scheme
///
/// Starts at 100 and subtracts the dimension's penalty for every failed rule.
/// Each dimension is pass/fail. The result is clamped at 0 and the profile is
/// eligible only when nothing is missing.
pub fn evaluate_with_penalties(
    profile: &BusinessProfile,
    scheme: &Scheme,
    penalties: &Penalties,
) -> Eligibility {
    let rules = &scheme.eligibility_rules;
    let mut missing = Vec::new();
    let mut score: i32 = 100;

    if let Some(types) = rules.business_types.as_deref().filter(|t| !t.is_empty()) {
        if !types.contains(&profile.business_type) {
            let allowed: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
            missing.push(format!("Business type must be one of: {}", allowed.join(", ")));
            score -= i32::from(penalties.business_type);
        }
    }

    if let Some(industries) = rules.industries.as_deref().filter(|i| !i.is_empty()) {
        if !contains_ignore_case(industries, &profile.industry) {
            missing.push(format!("Industry must be one of: {}", industries.join(", ")));
            score -= i32::from(penalties.industry);
        }
    }

    // Rule-level states take precedence over the scheme's legacy list.
    let states = rules
        .states
        .as_deref()
        .or(scheme.states_applicable.as_deref())
        .unwrap_or(&[]);
    if !states.is_empty() && !states.iter().any(|s| s == "*") {
        if !contains_ignore_case(states, &profile.state) {
            missing.push(format!("State must be one of: {}", states.join(", ")));
            score -= i32::from(penalties.state);
        }
    }

    if rules.turnover_max.is_some() || rules.turnover_min.is_some() {
        let turnover = range_midpoint(&profile.turnover_range);
        if let Some(max) = rules.turnover_max {
            if turnover > max {
                missing.push(format!("Turnover must be at most {} (lakhs)", max));
                score -= i32::from(penalties.turnover);
            }
        }
        if let Some(min) = rules.turnover_min {
            if turnover < min {
                missing.push(format!("Turnover must be at least {} (lakhs)", min));
                score -= i32::from(penalties.turnover);
            }
        }
    }

    if rules.company_age_max_years.is_some() || rules.company_age_min_years.is_some() {
        let age = range_midpoint(&profile.company_age);
        if let Some(max) = rules.company_age_max_years {
            if age > max {
                missing.push(format!("Company age must be at most {} years", max));
                score -= i32::from(penalties.company_age);
            }
        }
        if let Some(min) = rules.company_age_min_years {
            if age < min {
                missing.push(format!("Company age must be at least {} years", min));
                score -= i32::from(penalties.company_age);
            }
        }
    }

    let score = score.clamp(0, 100) as u8;

    Eligibility {
        eligible: missing.is_empty(),
        score,
        missing_requirements: missing,
    }
}

#[inline]
fn contains_ignore_case(values: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    values.iter().any(|v| v.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessType, EligibilityRules, FundingGoal, FundingType};

    fn create_test_profile() -> BusinessProfile {
        BusinessProfile {
            business_type: BusinessType::Small,
            industry: "Manufacturing".to_string(),
            state: "Gujarat".to_string(),
            turnover_range: "10-50".to_string(),
            company_age: "1-3".to_string(),
            funding_goal: Some(FundingGoal::Loan),
        }
    }

    fn create_test_scheme(rules: EligibilityRules) -> Scheme {
        Scheme {
            id: "scheme-1".to_string(),
            name: "Test Scheme".to_string(),
            scheme_type: FundingType::Loan,
            eligibility_rules: rules,
            benefit_summary: String::new(),
            states_applicable: None,
            key_benefit_display: None,
            required_documents: None,
            estimated_timeline: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_rules_always_eligible() {
        let result = evaluate_eligibility(&create_test_profile(), &create_test_scheme(EligibilityRules::default()));
        assert!(result.eligible);
        assert_eq!(result.score, 100);
        assert!(result.missing_requirements.is_empty());
    }

    #[test]
    fn test_full_match() {
        let scheme = create_test_scheme(EligibilityRules {
            business_types: Some(vec![BusinessType::Small, BusinessType::Medium]),
            states: Some(vec!["Gujarat".to_string(), "Maharashtra".to_string()]),
            turnover_max: Some(100.0),
            ..Default::default()
        });

        let result = evaluate_eligibility(&create_test_profile(), &scheme);
        assert!(result.eligible);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_industry_and_turnover_violations() {
        let scheme = create_test_scheme(EligibilityRules {
            industries: Some(vec!["Technology".to_string()]),
            turnover_max: Some(5.0),
            ..Default::default()
        });

        let result = evaluate_eligibility(&create_test_profile(), &scheme);
        assert!(!result.eligible);
        assert_eq!(result.score, 65);
        assert_eq!(
            result.missing_requirements,
            vec![
                "Industry must be one of: Technology".to_string(),
                "Turnover must be at most 5 (lakhs)".to_string(),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_industry_and_state() {
        let scheme = create_test_scheme(EligibilityRules {
            industries: Some(vec!["manufacturing".to_string()]),
            states: Some(vec!["GUJARAT".to_string()]),
            ..Default::default()
        });
        assert_eq!(evaluate_eligibility(&create_test_profile(), &scheme).score, 100);
    }

    #[test]
    fn test_wildcard_states_applicable() {
        let mut scheme = create_test_scheme(EligibilityRules::default());
        scheme.states_applicable = Some(vec!["*".to_string()]);

        let mut profile = create_test_profile();
        profile.state = "Nagaland".to_string();

        assert!(evaluate_eligibility(&profile, &scheme).eligible);
    }

    #[test]
    fn test_rule_states_take_precedence() {
        let mut scheme = create_test_scheme(EligibilityRules {
            states: Some(vec!["Karnataka".to_string()]),
            ..Default::default()
        });
        scheme.states_applicable = Some(vec!["Gujarat".to_string()]);

        let result = evaluate_eligibility(&create_test_profile(), &scheme);
        assert_eq!(result.score, 75);
        assert_eq!(result.missing_requirements, vec!["State must be one of: Karnataka".to_string()]);
    }

    #[test]
    fn test_legacy_states_applicable_used_when_rules_silent() {
        let mut scheme = create_test_scheme(EligibilityRules::default());
        scheme.states_applicable = Some(vec!["Kerala".to_string(), "Goa".to_string()]);

        let result = evaluate_eligibility(&create_test_profile(), &scheme);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_midpoint_used_for_bounds() {
        // "10-50" compares as 30: above a 25 minimum and below a 35 maximum.
        let scheme = create_test_scheme(EligibilityRules {
            turnover_min: Some(25.0),
            turnover_max: Some(35.0),
            ..Default::default()
        });
        assert_eq!(evaluate_eligibility(&create_test_profile(), &scheme).score, 100);

        let scheme = create_test_scheme(EligibilityRules {
            turnover_min: Some(40.0),
            ..Default::default()
        });
        let result = evaluate_eligibility(&create_test_profile(), &scheme);
        assert_eq!(result.score, 85);
        assert_eq!(result.missing_requirements, vec!["Turnover must be at least 40 (lakhs)".to_string()]);
    }

    #[test]
    fn test_company_age_bounds() {
        let scheme = create_test_scheme(EligibilityRules {
            company_age_min_years: Some(3.0),
            company_age_max_years: Some(1.5),
            ..Default::default()
        });

        let result = evaluate_eligibility(&create_test_profile(), &scheme);
        assert_eq!(result.score, 70);
        assert_eq!(
            result.missing_requirements,
            vec![
                "Company age must be at most 1.5 years".to_string(),
                "Company age must be at least 3 years".to_string(),
            ]
        );
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let mut profile = create_test_profile();
        profile.company_age = "10+".to_string();

        let scheme = create_test_scheme(EligibilityRules {
            business_types: Some(vec![BusinessType::Startup]),
            industries: Some(vec!["Technology".to_string()]),
            states: Some(vec!["Kerala".to_string()]),
            turnover_max: Some(1.0),
            company_age_max_years: Some(2.0),
            ..Default::default()
        });

        let result = evaluate_eligibility(&profile, &scheme);
        assert_eq!(result.score, 0);
        assert_eq!(result.missing_requirements.len(), 5);
        assert!(!result.eligible);
    }

    #[test]
    fn test_empty_lists_do_not_constrain() {
        let scheme = create_test_scheme(EligibilityRules {
            business_types: Some(vec![]),
            industries: Some(vec![]),
            states: Some(vec![]),
            ..Default::default()
        });
        assert!(evaluate_eligibility(&create_test_profile(), &scheme).eligible);
    }

    #[test]
    fn test_funding_types_not_scored() {
        let scheme = create_test_scheme(EligibilityRules {
            funding_types: Some(vec![FundingType::Grant]),
            ..Default::default()
        });
        assert_eq!(evaluate_eligibility(&create_test_profile(), &scheme).score, 100);
    }

    #[test]
    fn test_custom_penalties() {
        let scheme = create_test_scheme(EligibilityRules {
            industries: Some(vec!["Technology".to_string()]),
            ..Default::default()
        });
        let penalties = Penalties { industry: 40, ..Penalties::default() };

        assert_eq!(evaluate_with_penalties(&create_test_profile(), &scheme, &penalties).score, 60);
    }
}
