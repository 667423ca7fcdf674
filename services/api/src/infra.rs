use cirf::assessments::{
    AssessmentDraft, AssessmentId, AssessmentRecord, AssessmentRepository, AssessmentType,
    DraftRepository, RepositoryError, SavedAssessment, ToolGrant, UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable(format!("{name} lock poisoned")))
}

#[derive(Default)]
struct Ledger {
    records: Vec<AssessmentRecord>,
    balances: HashMap<UserId, u32>,
    grants: Vec<ToolGrant>,
}

/// Records, balances and grants share one lock so the credit deduction and
/// the record insert land together.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentStore {
    ledger: Arc<Mutex<Ledger>>,
    starting_credits: u32,
}

impl InMemoryAssessmentStore {
    pub(crate) fn new(starting_credits: u32) -> Self {
        Self {
            starting_credits,
            ..Self::default()
        }
    }
}

impl AssessmentRepository for InMemoryAssessmentStore {
    fn insert_with_credit(
        &self,
        record: AssessmentRecord,
        credit_cost: u32,
    ) -> Result<SavedAssessment, RepositoryError> {
        let mut guard = lock(&self.ledger, "assessment store")?;
        let ledger = &mut *guard;
        if ledger.records.iter().any(|held| held.id == record.id) {
            return Err(RepositoryError::Conflict);
        }

        let balance = ledger
            .balances
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

        ledger.records.push(record.clone());
        Ok(SavedAssessment {
            record,
            new_balance,
        })
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = lock(&self.ledger, "assessment store")?;
        Ok(guard.records.iter().find(|record| &record.id == id).cloned())
    }

    fn history(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = lock(&self.ledger, "assessment store")?;
        Ok(guard
            .records
            .iter()
            .rev()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect())
    }

    fn credit_balance(&self, user_id: &UserId) -> Result<u32, RepositoryError> {
        let guard = lock(&self.ledger, "assessment store")?;
        Ok(guard
            .balances
            .get(user_id)
            .copied()
            .unwrap_or(self.starting_credits))
    }

    fn grant_tool(&self, grant: ToolGrant) -> Result<bool, RepositoryError> {
        let mut guard = lock(&self.ledger, "assessment store")?;
        let held = guard
            .grants
            .iter()
            .any(|existing| existing.user_id == grant.user_id && existing.tool_id == grant.tool_id);
        if held {
            return Ok(false);
        }
        guard.grants.push(grant);
        Ok(true)
    }

    fn tool_grants(&self, user_id: &UserId) -> Result<Vec<ToolGrant>, RepositoryError> {
        let guard = lock(&self.ledger, "assessment store")?;
        Ok(guard
            .grants
            .iter()
            .filter(|grant| &grant.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDraftStore {
    drafts: Arc<Mutex<HashMap<(UserId, AssessmentType), AssessmentDraft>>>,
}

impl DraftRepository for InMemoryDraftStore {
    fn upsert(&self, draft: AssessmentDraft) -> Result<AssessmentDraft, RepositoryError> {
        let mut guard = lock(&self.drafts, "draft store")?;
        guard.insert(
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
        let guard = lock(&self.drafts, "draft store")?;
        Ok(guard.get(&(user_id.clone(), assessment_type)).cloned())
    }

    fn delete(
        &self,
        user_id: &UserId,
        assessment_type: AssessmentType,
    ) -> Result<bool, RepositoryError> {
        let mut guard = lock(&self.drafts, "draft store")?;
        Ok(guard.remove(&(user_id.clone(), assessment_type)).is_some())
    }
}
