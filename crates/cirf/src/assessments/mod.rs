//! Assessment question bank, scoring, unlock rules and the submission pipeline.
//!
//! Scoring, insights, validation and unlock rules are pure functions over the
//! static catalog. The service composes them with the repository traits, and
//! the router exposes the service over HTTP.

pub mod catalog;
pub mod domain;
pub mod insights;
pub mod repository;
pub mod response;
pub mod router;
pub mod scoring;
pub mod service;
pub mod unlock;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{AssessmentDefinition, AssessmentSummary, Question};
pub use domain::{
    AnswerValue, Answers, AssessmentId, AssessmentSubmission, AssessmentType, UserId,
};
pub use insights::ConstructInsights;
pub use repository::{
    AssessmentDraft, AssessmentRecord, AssessmentRepository, DraftRepository, RecordSummary,
    RepositoryError, SavedAssessment, ToolGrant,
};
pub use response::{ApiError, ErrorCode};
pub use router::{assessment_router, USER_ID_HEADER};
pub use scoring::{score_answers, Interpretation, InterpretationLevel, ScoreCard};
pub use service::{
    AssessmentService, AssessmentServiceError, DraftInput, ProgressSummary, SubmissionReceipt,
    UnlockStatus,
};
pub use unlock::Access;
pub use validation::{InvalidSubmission, ValidationError};
