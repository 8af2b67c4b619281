use crate::core::evaluator::evaluate_with_penalties;
use crate::models::{BusinessProfile, Penalties, Scheme, SchemeMatch};

/// Result of matching one profile against a whole catalog
#[derive(Debug)]
pub struct MatchSummary {
    pub matches: Vec<SchemeMatch>,
    pub total_schemes: usize,
    pub eligible_count: usize,
}

/// Runs the eligibility evaluator over a scheme catalog
///
/// Stateless apart from its penalties, so a single instance is shared by every
/// request handler.
#[derive(Debug, Clone)]
pub struct Matcher {
    penalties: Penalties,
}

impl Matcher {
    pub fn new(penalties: Penalties) -> Self {
        Self { penalties }
    }

    pub fn with_default_penalties() -> Self {
        Self {
            penalties: Penalties::default(),
        }
    }

    pub fn penalties(&self) -> &Penalties {
        &self.penalties
    }

    /// Score every scheme and sort by score, highest first
    ///
    /// Nothing is filtered out. The sort is stable, so schemes with equal
    /// scores keep their catalog order.
    pub fn match_schemes(&self, profile: &BusinessProfile, schemes: Vec<Scheme>) -> Vec<SchemeMatch> {
        let mut matches: Vec<SchemeMatch> = schemes
            .into_iter()
            .map(|scheme| {
                let eligibility = evaluate_with_penalties(profile, &scheme, &self.penalties);
                SchemeMatch {
                    scheme,
                    score: eligibility.score,
                    missing_requirements: eligibility.missing_requirements,
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    /// Match and count the fully eligible schemes
    pub fn summarize(&self, profile: &BusinessProfile, schemes: Vec<Scheme>) -> MatchSummary {
        let total_schemes = schemes.len();
        let matches = self.match_schemes(profile, schemes);
        let eligible_count = matches.iter().filter(|m| m.is_eligible()).count();

        MatchSummary {
            matches,
            total_schemes,
            eligible_count,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_penalties()
    }
}

/// Match a profile against a catalog with the default penalties
pub fn match_schemes(profile: &BusinessProfile, schemes: Vec<Scheme>) -> Vec<SchemeMatch> {
    Matcher::with_default_penalties().match_schemes(profile, schemes)
}
