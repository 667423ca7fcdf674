use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answers, AssessmentId, AssessmentType, UserId};
use super::scoring::{Interpretation, InterpretationLevel, ScoreCard};

/// Immutable result of one submission. Retaking an assessment appends a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    pub answers: Answers,
    pub score: u8,
    pub interpretation: InterpretationLevel,
    pub section_scores: BTreeMap<String, u8>,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn new(
        user_id: UserId,
        assessment_type: AssessmentType,
        answers: Answers,
        card: ScoreCard,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            user_id,
            assessment_type,
            answers,
            score: card.overall_score,
            interpretation: InterpretationLevel::for_score(card.overall_score),
            section_scores: card.section_scores,
            created_at,
        }
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id,
            assessment_type: self.assessment_type,
            score: self.score,
            interpretation: Interpretation::from(self.interpretation),
            section_scores: self.section_scores.clone(),
            created_at: self.created_at,
        }
    }
}

/// History listing view without the raw answers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    pub id: AssessmentId,
    pub assessment_type: AssessmentType,
    pub score: u8,
    pub interpretation: Interpretation,
    pub section_scores: BTreeMap<String, u8>,
    pub created_at: DateTime<Utc>,
}

/// Stored record plus the balance left after the credit deduction.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedAssessment {
    pub record: AssessmentRecord,
    pub new_balance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolGrant {
    pub user_id: UserId,
    pub tool_id: String,
    pub granted_by: AssessmentType,
    pub granted_at: DateTime<Utc>,
}

/// In-progress answers, one per user and assessment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDraft {
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    pub answers: Answers,
    pub current_section: u32,
    pub updated_at: DateTime<Utc>,
}

/// Storage for assessment records, credit balances and tool grants.
pub trait AssessmentRepository: Send + Sync {
    /// Persist the record and deduct `credit_cost` in one atomic step.
    ///
    /// Nothing is stored when the balance is short.
    fn insert_with_credit(
        &self,
        record: AssessmentRecord,
        credit_cost: u32,
    ) -> Result<SavedAssessment, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Records of one user, newest first.
    fn history(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, RepositoryError>;
    fn credit_balance(&self, user_id: &UserId) -> Result<u32, RepositoryError>;
    /// Returns `false` when the user already held the grant.
    fn grant_tool(&self, grant: ToolGrant) -> Result<bool, RepositoryError>;
    fn tool_grants(&self, user_id: &UserId) -> Result<Vec<ToolGrant>, RepositoryError>;
}

pub trait DraftRepository: Send + Sync {
    fn upsert(&self, draft: AssessmentDraft) -> Result<AssessmentDraft, RepositoryError>;
    fn fetch(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<Option<AssessmentDraft>, RepositoryError>;
    /// Returns `false` when there was nothing to delete.
    fn delete(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<bool, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("insufficient credits: balance {balance}, required {required}")]
    InsufficientCredits { balance: u32, required: u32 },
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
