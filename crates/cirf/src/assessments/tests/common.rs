use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::assessments::catalog::definition;
use crate::assessments::domain::{
    AnswerValue, Answers, AssessmentId, AssessmentSubmission, AssessmentType, UserId,
};
use crate::assessments::repository::{
    AssessmentDraft, AssessmentRecord, AssessmentRepository, DraftRepository, RepositoryError,
    SavedAssessment, ToolGrant,
};
use crate::assessments::{assessment_router, AssessmentService};
use crate::rate_limit::RateLimitConfig;

pub(super) fn user() -> UserId {
    UserId("user-001".to_string())
}

pub(super) fn generous_limit() -> RateLimitConfig {
    RateLimitConfig {
        window: Duration::from_secs(60),
        max_requests: 100,
    }
}

/// Every Likert item answered with `value`, every profile question with its first option.
pub(super) fn uniform_answers(kind: AssessmentType, value: i64) -> Answers {
    let definition = definition(kind);
    let mut answers: Answers = definition
        .questions
        .iter()
        .map(|question| (question.id.to_string(), AnswerValue::Likert(value)))
        .collect();
    for question in definition.profile_questions {
        answers.insert(
            question.id.to_string(),
            AnswerValue::Choice(question.options[0].value.to_string()),
        );
    }
    answers
}

pub(super) fn submission(kind: AssessmentType, value: i64) -> AssessmentSubmission {
    AssessmentSubmission {
        assessment_type: kind,
        answers: uniform_answers(kind, value),
    }
}

pub(super) type MemoryService = AssessmentService<MemoryRepository, MemoryDrafts>;

pub(super) fn build_service(
    starting_credits: u32,
) -> (MemoryService, Arc<MemoryRepository>, Arc<MemoryDrafts>) {
    let repository = Arc::new(MemoryRepository::with_credits(starting_credits));
    let drafts = Arc::new(MemoryDrafts::default());
    let service = AssessmentService::new(repository.clone(), drafts.clone(), generous_limit());
    (service, repository, drafts)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<AssessmentRecord>>>,
    pub(super) balances: Arc<Mutex<HashMap<UserId, u32>>>,
    pub(super) grants: Arc<Mutex<Vec<ToolGrant>>>,
    starting_credits: u32,
}

impl MemoryRepository {
    pub(super) fn with_credits(starting_credits: u32) -> Self {
        Self {
            starting_credits,
            ..Self::default()
        }
    }

    pub(super) fn record_count(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn insert_with_credit(
        &self,
        record: AssessmentRecord,
        credit_cost: u32,
    ) -> Result<SavedAssessment, RepositoryError> {
        let mut records = self.records.lock().expect("repository mutex poisoned");
        let mut balances = self.balances.lock().expect("balance mutex poisoned");
        let balance = balances
            .entry(record.user_id.clone())
            .or_insert(self.starting_credits);
        if *balance < credit_cost {
            return Err(RepositoryError::InsufficientCredits {
                balance: *balance,
                required: credit_cost,
            });
        }
        *balance -= credit_cost;
        let new_balance = *balance;
        records.push(record.clone());
        Ok(SavedAssessment {
            record,
            new_balance,
        })
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let records = self.records.lock().expect("repository mutex poisoned");
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let records = self.records.lock().expect("repository mutex poisoned");
        Ok(records
            .iter()
            .rev()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect())
    }

    fn credit_balance(&self, user_id: &UserId) -> Result<u32, RepositoryError> {
        let balances = self.balances.lock().expect("balance mutex poisoned");
        Ok(balances
            .get(user_id)
            .copied()
            .unwrap_or(self.starting_credits))
    }

    fn grant_tool(&self, grant: ToolGrant) -> Result<bool, RepositoryError> {
        let mut grants = self.grants.lock().expect("grant mutex poisoned");
        if grants
            .iter()
            .any(|held| held.user_id == grant.user_id && held.tool_id == grant.tool_id)
        {
            return Ok(false);
        }
        grants.push(grant);
        Ok(true)
    }

    fn tool_grants(&self, user_id: &UserId) -> Result<Vec<ToolGrant>, RepositoryError> {
        let grants = self.grants.lock().expect("grant mutex poisoned");
        Ok(grants
            .iter()
            .filter(|grant| &grant.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDrafts {
    pub(super) drafts: Arc<Mutex<HashMap<(UserId, AssessmentType), AssessmentDraft>>>,
}

impl DraftRepository for MemoryDrafts {
    fn upsert(&self, draft: AssessmentDraft) -> Result<AssessmentDraft, RepositoryError> {
        let mut drafts = self.drafts.lock().expect("draft mutex poisoned");
        drafts.insert(
            (draft.user_id.clone(), draft.assessment_type),
            draft.clone(),
        );
        Ok(draft)
    }

    fn fetch(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<Option<AssessmentDraft>, RepositoryError> {
        let drafts = self.drafts.lock().expect("draft mutex poisoned");
        Ok(drafts.get(&(user_id.clone(), assessment_type)).cloned())
    }

    fn delete(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<bool, RepositoryError> {
        let mut drafts = self.drafts.lock().expect("draft mutex poisoned");
        Ok(drafts.remove(&(user_id.clone(), assessment_type)).is_some())
    }
}

/// Stores records but refuses every grant, to show grants never fail a submission.
#[derive(Default, Clone)]
pub(super) struct GrantFailingRepository {
    pub(super) inner: MemoryRepository,
}

impl AssessmentRepository for GrantFailingRepository {
    fn insert_with_credit(
        &self,
        record: AssessmentRecord,
        credit_cost: u32,
    ) -> Result<SavedAssessment, RepositoryError> {
        self.inner.insert_with_credit(record, credit_cost)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        self.inner.history(user_id)
    }

    fn credit_balance(&self, user_id: &UserId) -> Result<u32, RepositoryError> {
        self.inner.credit_balance(user_id)
    }

    fn grant_tool(&self, _grant: ToolGrant) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("grant table locked".to_string()))
    }

    fn tool_grants(&self, _user_id: &UserId) -> Result<Vec<ToolGrant>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert_with_credit(
        &self,
        _record: AssessmentRecord,
        _credit_cost: u32,
    ) -> Result<SavedAssessment, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn history(&self, _user_id: &UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn credit_balance(&self, _user_id: &UserId) -> Result<u32, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn grant_tool(&self, _grant: ToolGrant) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn tool_grants(&self, _user_id: &UserId) -> Result<Vec<ToolGrant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
