// Core engine exports
pub mod derive;
pub mod evaluator;
pub mod matcher;
pub mod ranges;
pub mod tables;

pub use derive::{derive_from_legacy_flow, derive_from_msme_flow, derive_from_startup_flow, derive_profile};
pub use evaluator::{evaluate_eligibility, evaluate_with_penalties};
pub use matcher::{match_schemes, MatchSummary, Matcher};
pub use ranges::range_midpoint;
