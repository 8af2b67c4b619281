// Model exports
pub mod answers;
pub mod domain;
pub mod requests;
pub mod responses;

pub use answers::{LegacyAnswers, MsmeAnswers, RawAnswers, StartupAnswers, Step2Answers};
pub use domain::{
    Application, ApplicationStatus, BusinessProfile, BusinessType, Eligibility, EligibilityRules,
    EntityType, FundingGoal, FundingType, Penalties, Scheme, SchemeMatch, UserSchemeMatch,
};
pub use requests::{
    AnswersPayload, ClaimProfileRequest, CreateApplicationRequest, PreviewMatchesRequest,
    SchemePayload, SubmitProfileRequest, UpdateProfileRequest, UserQuery,
};
pub use responses::{
    ApplicationDetailResponse, ApplicationsResponse, ClaimProfileResponse, CreatedResponse,
    ErrorResponse, HealthResponse, MatchSchemesResponse, PreviewMatchesResponse,
    ProfileSummaryResponse, QuestionnaireResponse, SavedMatchesResponse, SchemeSummary,
    SubmitProfileResponse,
};
