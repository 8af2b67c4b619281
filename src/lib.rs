//! Scheme Match - eligibility derivation and government scheme matching
//!
//! Turns questionnaire answers into a normalized business profile, scores the
//! profile against every scheme's eligibility rules and serves the results
//! over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod questionnaire;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{derive_profile, evaluate_eligibility, match_schemes, range_midpoint, Matcher};
pub use crate::models::{BusinessProfile, Eligibility, EligibilityRules, RawAnswers, Scheme, SchemeMatch};
pub use crate::questionnaire::get_option_label;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let profile = derive_profile(&RawAnswers::Legacy(Default::default()));
        let scheme = Scheme {
            id: "open".to_string(),
            name: "Open scheme".to_string(),
            scheme_type: models::FundingType::Grant,
            eligibility_rules: EligibilityRules::default(),
            benefit_summary: String::new(),
            states_applicable: None,
            key_benefit_display: None,
            required_documents: None,
            estimated_timeline: None,
            created_at: None,
            updated_at: None,
        };

        assert!(evaluate_eligibility(&profile, &scheme).eligible);
        assert_eq!(range_midpoint("10-50"), 30.0);
    }
}
