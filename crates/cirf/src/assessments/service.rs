use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::{self, AssessmentDefinition, AssessmentSummary};
use super::domain::{Answers, AssessmentId, AssessmentSubmission, AssessmentType, UserId};
use super::insights::{self, ConstructInsights};
use super::repository::{
    AssessmentDraft, AssessmentRecord, AssessmentRepository, DraftRepository, RecordSummary,
    RepositoryError, ToolGrant,
};
use super::scoring::{score_answers, Interpretation};
use super::unlock::{self, Access};
use super::validation::{validate_submission, InvalidSubmission};
use crate::rate_limit::{RateDecision, RateLimitConfig, RateLimiter};

/// Service composing validation, scoring, unlock rules and persistence.
pub struct AssessmentService<R, D> {
    repository: Arc<R>,
    drafts: Arc<D>,
    limiter: Arc<RateLimiter>,
}

impl<R, D> AssessmentService<R, D>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    pub fn new(repository: Arc<R>, drafts: Arc<D>, submission_limit: RateLimitConfig) -> Self {
        Self {
            repository,
            drafts,
            limiter: Arc::new(RateLimiter::new(submission_limit)),
        }
    }

    /// Score and persist a submission, then hand out what its completion unlocks.
    pub fn submit(
        &self,
        user_id: &UserId,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionReceipt, AssessmentServiceError> {
        let started = Instant::now();
        let kind = submission.assessment_type;

        if let RateDecision::Limited { retry_after } =
            self.limiter.check(&format!("{user_id}:submit"))
        {
            warn!(%user_id, assessment_type = %kind, "submission rate limited");
            return Err(AssessmentServiceError::RateLimited {
                retry_after_secs: whole_seconds(retry_after),
            });
        }

        let completed = self.completed_types(user_id)?;
        if let Access::Locked { requires } = unlock::access(kind, &completed) {
            return Err(AssessmentServiceError::Locked {
                assessment_type: kind,
                requires,
            });
        }

        let definition = catalog::definition(kind);
        validate_submission(definition, &submission.answers)?;

        let card = score_answers(&submission.answers, definition.questions);
        let record = AssessmentRecord::new(
            user_id.clone(),
            kind,
            submission.answers,
            card,
            Utc::now(),
        );
        let saved = self
            .repository
            .insert_with_credit(record, definition.credit_cost)?;

        let before = unlock::accessible(&completed);
        let mut after = completed;
        after.insert(kind);
        let unlocked_assessments: Vec<_> = unlock::accessible(&after)
            .into_iter()
            .filter(|candidate| !before.contains(candidate))
            .collect();

        let grants = unlock::completion_grants(kind);
        let granted_tools = self.apply_grants(user_id, kind, &grants.tools);
        let granted_resources = self.apply_grants(user_id, kind, &grants.resources);

        if let Err(error) = self.drafts.delete(user_id, kind) {
            warn!(%user_id, assessment_type = %kind, %error, "failed to clear draft after submission");
        }

        let record = saved.record;
        info!(
            %user_id,
            assessment_type = %kind,
            assessment_id = %record.id,
            score = record.score,
            duration_ms = started.elapsed().as_millis() as u64,
            "assessment submitted"
        );

        Ok(SubmissionReceipt {
            assessment_id: record.id,
            score: record.score,
            interpretation: Interpretation::from(record.interpretation),
            section_scores: record.section_scores,
            new_balance: saved.new_balance,
            unlocked_assessments,
            granted_tools,
            granted_resources,
        })
    }

    /// Grant each id, returning the ones the user did not already hold.
    /// Failures are logged and skipped so they never undo a stored submission.
    fn apply_grants(
        &self,
        user_id: &UserId,
        granted_by: AssessmentType,
        ids: &[&'static str],
    ) -> Vec<&'static str> {
        let mut granted = Vec::new();
        for id in ids {
            let grant = ToolGrant {
                user_id: user_id.clone(),
                tool_id: (*id).to_string(),
                granted_by,
                granted_at: Utc::now(),
            };
            match self.repository.grant_tool(grant) {
                Ok(true) => granted.push(*id),
                Ok(false) => {}
                Err(error) => {
                    warn!(%user_id, grant = %id, %error, "failed to record completion grant");
                }
            }
        }
        granted
    }

    fn completed_types(
        &self,
        user_id: &UserId,
    ) -> Result<BTreeSet<AssessmentType>, RepositoryError> {
        Ok(self
            .repository
            .history(user_id)?
            .into_iter()
            .map(|record| record.assessment_type)
            .collect())
    }

    pub fn check_access(
        &self,
        user_id: &UserId,
        kind: AssessmentType,
    ) -> Result<AccessView, AssessmentServiceError> {
        let completed = self.completed_types(user_id)?;
        Ok(AccessView {
            assessment_type: kind,
            access: unlock::access(kind, &completed),
            requirement: unlock::requirement_message(kind),
        })
    }

    pub fn unlock_status(&self, user_id: &UserId) -> Result<UnlockStatus, AssessmentServiceError> {
        let completed = self.completed_types(user_id)?;
        let assessments = AssessmentType::ALL
            .into_iter()
            .map(|kind| AssessmentUnlock {
                assessment_type: kind,
                unlocked: unlock::access(kind, &completed).is_unlocked(),
                completed: completed.contains(&kind),
                requirement: unlock::requirement_message(kind),
            })
            .collect();

        let (tools, resources): (Vec<_>, Vec<_>) = self
            .repository
            .tool_grants(user_id)?
            .into_iter()
            .map(|grant| grant.tool_id)
            .partition(|id| catalog::tool(id).is_some());

        Ok(UnlockStatus {
            assessments,
            tools,
            resources,
        })
    }

    pub fn progress_summary(
        &self,
        user_id: &UserId,
    ) -> Result<ProgressSummary, AssessmentServiceError> {
        let history = self.repository.history(user_id)?;
        let completed: BTreeSet<_> = history.iter().map(|record| record.assessment_type).collect();

        let mut assessments = BTreeMap::new();
        for kind in AssessmentType::ALL {
            let mut records = history.iter().filter(|record| record.assessment_type == kind);
            let latest_score = records.next().map(|record| record.score);
            let completion_count = latest_score.map_or(0, |_| 1 + records.count());
            assessments.insert(
                kind,
                AssessmentProgress {
                    is_unlocked: unlock::access(kind, &completed).is_unlocked(),
                    is_completed: completed.contains(&kind),
                    latest_score,
                    completion_count,
                },
            );
        }

        let total = AssessmentType::ALL.len();
        let unlocked = assessments.values().filter(|p| p.is_unlocked).count();
        let completion_percentage =
            ((completed.len() as f64 / total as f64) * 100.0).round() as u8;

        Ok(ProgressSummary {
            total_assessments: total,
            completed_assessments: completed.len(),
            unlocked_assessments: unlocked,
            completion_percentage,
            assessments,
        })
    }

    pub fn history(&self, user_id: &UserId) -> Result<Vec<RecordSummary>, AssessmentServiceError> {
        Ok(self
            .repository
            .history(user_id)?
            .iter()
            .map(AssessmentRecord::summary)
            .collect())
    }

    /// A single record with its construct insights. Other users' records read as missing.
    pub fn record(
        &self,
        user_id: &UserId,
        id: &AssessmentId,
    ) -> Result<RecordDetail, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .filter(|record| &record.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        let definition = catalog::definition(record.assessment_type);
        let insights = insights::analyze(&record.answers, definition.questions);

        Ok(RecordDetail {
            interpretation: Interpretation::from(record.interpretation),
            record,
            insights,
        })
    }

    pub fn save_draft(
        &self,
        user_id: &UserId,
        input: DraftInput,
    ) -> Result<AssessmentDraft, AssessmentServiceError> {
        let draft = AssessmentDraft {
            user_id: user_id.clone(),
            assessment_type: input.assessment_type,
            answers: input.answers,
            current_section: input.current_section,
            updated_at: Utc::now(),
        };
        Ok(self.drafts.upsert(draft)?)
    }

    pub fn draft(
        &self,
        user_id: &UserId,
        kind: AssessmentType,
    ) -> Result<Option<AssessmentDraft>, AssessmentServiceError> {
        Ok(self.drafts.fetch(user_id, kind)?)
    }

    pub fn delete_draft(
        &self,
        user_id: &UserId,
        kind: AssessmentType,
    ) -> Result<bool, AssessmentServiceError> {
        Ok(self.drafts.delete(user_id, kind)?)
    }

    pub fn catalog(&self) -> Vec<AssessmentSummary> {
        catalog::all().map(AssessmentDefinition::summary).collect()
    }

    pub fn definition(&self, kind: AssessmentType) -> &'static AssessmentDefinition {
        catalog::definition(kind)
    }
}

fn whole_seconds(duration: Duration) -> u64 {
    let secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
    secs.max(1)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub assessment_id: AssessmentId,
    pub score: u8,
    pub interpretation: Interpretation,
    pub section_scores: BTreeMap<String, u8>,
    pub new_balance: u32,
    pub unlocked_assessments: Vec<AssessmentType>,
    pub granted_tools: Vec<&'static str>,
    pub granted_resources: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessView {
    pub assessment_type: AssessmentType,
    pub access: Access,
    pub requirement: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentUnlock {
    pub assessment_type: AssessmentType,
    pub unlocked: bool,
    pub completed: bool,
    pub requirement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnlockStatus {
    pub assessments: Vec<AssessmentUnlock>,
    pub tools: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    pub is_unlocked: bool,
    pub is_completed: bool,
    pub latest_score: Option<u8>,
    pub completion_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_assessments: usize,
    pub completed_assessments: usize,
    pub unlocked_assessments: usize,
    pub completion_percentage: u8,
    pub assessments: BTreeMap<AssessmentType, AssessmentProgress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordDetail {
    pub record: AssessmentRecord,
    pub interpretation: Interpretation,
    pub insights: ConstructInsights,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInput {
    pub assessment_type: AssessmentType,
    #[serde(default)]
    pub answers: Answers,
    #[serde(default)]
    pub current_section: u32,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("too many submissions, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
    #[error("{assessment_type} is locked until {requires} is completed")]
    Locked {
        assessment_type: AssessmentType,
        requires: AssessmentType,
    },
    #[error(transparent)]
    Validation(#[from] InvalidSubmission),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
