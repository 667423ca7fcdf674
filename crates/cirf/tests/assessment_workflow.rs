//! Integration scenarios for the assessment submission and unlock workflow.
//!
//! Everything here goes through the public service facade and HTTP router, so
//! the scenarios exercise scoring, unlocks, credits and drafts together.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::response::Response;
    use serde_json::Value;

    use cirf::assessments::catalog::definition;
    use cirf::assessments::{
        AnswerValue, Answers, AssessmentDraft, AssessmentId, AssessmentRecord,
        AssessmentRepository, AssessmentService, AssessmentSubmission, AssessmentType,
        DraftRepository, RepositoryError, SavedAssessment, ToolGrant, UserId, USER_ID_HEADER,
    };
    use cirf::rate_limit::RateLimitConfig;

    #[derive(Default)]
    struct Tables {
        records: Vec<AssessmentRecord>,
        balances: HashMap<UserId, u32>,
        grants: Vec<ToolGrant>,
    }

    #[derive(Default, Clone)]
    pub struct Store {
        tables: Arc<Mutex<Tables>>,
        starting_credits: u32,
    }

    impl Store {
        pub fn with_credits(starting_credits: u32) -> Self {
            Self {
                starting_credits,
                ..Self::default()
            }
        }

        pub fn record_count(&self) -> usize {
            self.tables.lock().expect("store mutex poisoned").records.len()
        }
    }

    impl AssessmentRepository for Store {
        fn insert_with_credit(
            &self,
            record: AssessmentRecord,
            credit_cost: u32,
        ) -> Result<SavedAssessment, RepositoryError> {
            let mut tables = self.tables.lock().expect("store mutex poisoned");
            let starting = self.starting_credits;
            let balance = tables
                .balances
                .entry(record.user_id.clone())
                .or_insert(starting);
            if *balance < credit_cost {
                return Err(RepositoryError::InsufficientCredits {
                    balance: *balance,
                    required: credit_cost,
                });
            }
            *balance -= credit_cost;
            let new_balance = *balance;
            tables.records.push(record.clone());
            Ok(SavedAssessment {
                record,
                new_balance,
            })
        }

        fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
            let tables = self.tables.lock().expect("store mutex poisoned");
            Ok(tables.records.iter().find(|record| &record.id == id).cloned())
        }

        fn history(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
            let tables = self.tables.lock().expect("store mutex poisoned");
            Ok(tables
                .records
                .iter()
                .rev()
                .filter(|record| &record.user_id == user_id)
                .cloned()
                .collect())
        }

        fn credit_balance(&self, user_id: &UserId) -> Result<u32, RepositoryError> {
            let tables = self.tables.lock().expect("store mutex poisoned");
            Ok(tables
                .balances
                .get(user_id)
                .copied()
                .unwrap_or(self.starting_credits))
        }

        fn grant_tool(&self, grant: ToolGrant) -> Result<bool, RepositoryError> {
            let mut tables = self.tables.lock().expect("store mutex poisoned");
            if tables
                .grants
                .iter()
                .any(|held| held.user_id == grant.user_id && held.tool_id == grant.tool_id)
            {
                return Ok(false);
            }
            tables.grants.push(grant);
            Ok(true)
        }

        fn tool_grants(&self, user_id: &UserId) -> Result<Vec<ToolGrant>, RepositoryError> {
            let tables = self.tables.lock().expect("store mutex poisoned");
            Ok(tables
                .grants
                .iter()
                .filter(|grant| &grant.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct Drafts {
        drafts: Arc<Mutex<HashMap<(UserId, AssessmentType), AssessmentDraft>>>,
    }

    impl DraftRepository for Drafts {
        fn upsert(&self, draft: AssessmentDraft) -> Result<AssessmentDraft, RepositoryError> {
            self.drafts
                .lock()
                .expect("draft mutex poisoned")
                .insert((draft.user_id.clone(), draft.assessment_type), draft.clone());
            Ok(draft)
        }

        fn fetch(
            &self,
            user_id: &UserId,
            assessment_type: AssessmentType,
        ) -> Result<Option<AssessmentDraft>, RepositoryError> {
            Ok(self
                .drafts
                .lock()
                .expect("draft mutex poisoned")
                .get(&(user_id.clone(), assessment_type))
                .cloned())
        }

        fn delete(
            &self,
            user_id: &UserId,
            assessment_type: AssessmentType,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .drafts
                .lock()
                .expect("draft mutex poisoned")
                .remove(&(user_id.clone(), assessment_type))
                .is_some())
        }
    }

    pub type Service = AssessmentService<Store, Drafts>;

    pub fn service(starting_credits: u32) -> (Arc<Service>, Store, Drafts) {
        let store = Store::with_credits(starting_credits);
        let drafts = Drafts::default();
        let service = AssessmentService::new(
            Arc::new(store.clone()),
            Arc::new(drafts.clone()),
            RateLimitConfig::default(),
        );
        (Arc::new(service), store, drafts)
    }

    pub fn member() -> UserId {
        UserId("member-42".to_string())
    }

    /// Likert answers follow `pattern` in question order; profile questions take their first option.
    pub fn answers(kind: AssessmentType, pattern: &[i64]) -> Answers {
        let definition = definition(kind);
        let mut answers: Answers = definition
            .questions
            .iter()
            .zip(pattern.iter().copied().cycle())
            .map(|(question, value)| (question.id.to_string(), AnswerValue::Likert(value)))
            .collect();
        for question in definition.profile_questions {
            answers.insert(
                question.id.to_string(),
                AnswerValue::Choice(question.options[0].value.to_string()),
            );
        }
        answers
    }

    pub fn submission(kind: AssessmentType, pattern: &[i64]) -> AssessmentSubmission {
        AssessmentSubmission {
            assessment_type: kind,
            answers: answers(kind, pattern),
        }
    }

    pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(USER_ID_HEADER, "member-42")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
            .expect("request builds")
    }

    pub fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri)
            .header(USER_ID_HEADER, "member-42")
            .body(Body::empty())
            .expect("request builds")
    }

    pub async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 512 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }
}

use axum::http::StatusCode;
use cirf::assessments::{
    assessment_router, score_answers, AssessmentRepository, AssessmentServiceError,
    AssessmentType, DraftInput, DraftRepository, RepositoryError,
};
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[test]
fn full_journey_unlocks_everything_and_spends_one_credit() {
    let (service, store, _) = service(1);
    let user = member();

    let cirf = service
        .submit(&user, submission(AssessmentType::Cirf, &[6, 5, 7]))
        .expect("cirf accepted");
    assert_eq!(cirf.new_balance, 0);
    assert_eq!(cirf.unlocked_assessments.len(), 5);

    for kind in AssessmentType::ALL.into_iter().skip(1) {
        let receipt = service
            .submit(&user, submission(kind, &[4, 6]))
            .expect("secondary accepted");
        assert_eq!(receipt.new_balance, 0);
        assert_eq!(receipt.granted_tools.len(), 2, "{kind} grants two tools");
    }

    let progress = service.progress_summary(&user).expect("progress");
    assert_eq!(progress.completed_assessments, 6);
    assert_eq!(progress.completion_percentage, 100);

    let status = service.unlock_status(&user).expect("unlocks");
    assert_eq!(status.tools.len(), 10);
    assert_eq!(status.resources.len(), 2);
    assert_eq!(store.record_count(), 6);
    assert_eq!(store.credit_balance(&user).expect("balance"), 0);
}

#[test]
fn stored_scores_are_reproducible_from_answers() {
    let (service, _, _) = service(1);
    let user = member();
    let receipt = service
        .submit(&user, submission(AssessmentType::Cirf, &[2, 7, 5, 3]))
        .expect("cirf accepted");

    let detail = service
        .record(&user, &receipt.assessment_id)
        .expect("record readable");
    let questions = service.definition(AssessmentType::Cirf).questions;
    let recomputed = score_answers(&detail.record.answers, questions);

    assert_eq!(recomputed.overall_score, detail.record.score);
    assert_eq!(recomputed.section_scores, detail.record.section_scores);
}

#[test]
fn rejected_submissions_leave_no_trace() {
    let (service, store, _) = service(0);
    let user = member();

    let locked = service
        .submit(&user, submission(AssessmentType::Tbl, &[5]))
        .expect_err("tbl is locked");
    assert!(matches!(locked, AssessmentServiceError::Locked { .. }));

    let short = service
        .submit(&user, submission(AssessmentType::Cirf, &[5]))
        .expect_err("no credits");
    assert!(matches!(
        short,
        AssessmentServiceError::Repository(RepositoryError::InsufficientCredits { .. })
    ));

    assert_eq!(store.record_count(), 0);
    assert!(store.tool_grants(&user).expect("grants").is_empty());
}

#[test]
fn drafts_survive_until_their_assessment_is_submitted() {
    let (service, _, drafts) = service(1);
    let user = member();
    service
        .save_draft(
            &user,
            DraftInput {
                assessment_type: AssessmentType::Cirf,
                answers: answers(AssessmentType::Cirf, &[4]),
                current_section: 3,
            },
        )
        .expect("draft saved");

    assert!(drafts
        .fetch(&user, AssessmentType::Cirf)
        .expect("fetch")
        .is_some());
    service
        .submit(&user, submission(AssessmentType::Cirf, &[4]))
        .expect("cirf accepted");
    assert!(drafts
        .fetch(&user, AssessmentType::Cirf)
        .expect("fetch")
        .is_none());
}

#[tokio::test]
async fn http_submission_then_unlocks_via_router() {
    let (service, _, _) = service(1);
    let router = assessment_router(service);

    let locked = router
        .clone()
        .oneshot(get_request("/api/v1/assessments/cira/access"))
        .await
        .expect("route executes");
    let payload = json_body(locked).await;
    assert_eq!(payload["data"]["access"]["status"], json!("locked"));

    let body = serde_json::to_value(submission(AssessmentType::Cirf, &[7])).expect("serialize");
    let created = router
        .clone()
        .oneshot(json_request("POST", "/api/v1/assessments/submit", &body))
        .await
        .expect("route executes");
    assert_eq!(created.status(), StatusCode::CREATED);
    let payload = json_body(created).await;
    assert_eq!(payload["data"]["score"], json!(100));
    assert_eq!(
        payload["data"]["grantedResources"],
        json!([
            "resource-funding-guide-2026",
            "resource-creative-reconstruction"
        ])
    );

    let unlocked = router
        .clone()
        .oneshot(get_request("/api/v1/assessments/cira/access"))
        .await
        .expect("route executes");
    let payload = json_body(unlocked).await;
    assert_eq!(payload["data"]["access"], json!({ "status": "unlocked" }));

    let history = router
        .oneshot(get_request("/api/v1/me/assessments"))
        .await
        .expect("route executes");
    let payload = json_body(history).await;
    assert_eq!(payload["data"][0]["assessmentType"], json!("cirf"));
    assert_eq!(payload["data"][0]["interpretation"]["label"], json!("Thriving"));
}
