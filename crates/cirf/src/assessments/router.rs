use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{AssessmentId, AssessmentSubmission, AssessmentType, UserId};
use super::repository::{AssessmentRepository, DraftRepository};
use super::response::{success, ApiError, ErrorCode};
use super::service::{AssessmentService, DraftInput};

/// Header carrying the caller identity established by the auth layer in front of this service.
pub const USER_ID_HEADER: &str = "x-user-id";

type SharedService<R, D> = Arc<AssessmentService<R, D>>;

/// Router builder exposing the assessment endpoints under `/api/v1`.
pub fn assessment_router<R, D>(service: SharedService<R, D>) -> Router
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments", get(catalog_handler::<R, D>))
        .route("/api/v1/assessments/submit", post(submit_handler::<R, D>))
        .route(
            "/api/v1/assessments/drafts",
            get(get_draft_handler::<R, D>)
                .post(save_draft_handler::<R, D>)
                .delete(delete_draft_handler::<R, D>),
        )
        .route(
            "/api/v1/assessments/records/:assessment_id",
            get(record_handler::<R, D>),
        )
        .route(
            "/api/v1/assessments/:assessment_type",
            get(definition_handler::<R, D>),
        )
        .route(
            "/api/v1/assessments/:assessment_type/access",
            get(access_handler::<R, D>),
        )
        .route("/api/v1/me/unlocks", get(unlocks_handler::<R, D>))
        .route("/api/v1/me/progress", get(progress_handler::<R, D>))
        .route("/api/v1/me/assessments", get(history_handler::<R, D>))
        .with_state(service)
}

fn current_user(headers: &HeaderMap) -> Result<UserId, ApiError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| UserId(value.to_string()))
        .ok_or_else(ApiError::unauthorized)
}

fn parse_type(raw: &str) -> Result<AssessmentType, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid assessment type"))
}

#[derive(Debug, Deserialize)]
pub(crate) struct DraftQuery {
    #[serde(rename = "type")]
    assessment_type: Option<String>,
}

impl DraftQuery {
    fn required_type(&self) -> Result<AssessmentType, ApiError> {
        match self.assessment_type.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_type(raw),
            _ => Err(ApiError::bad_request("Assessment type is required")),
        }
    }
}

pub(crate) async fn catalog_handler<R, D>(State(service): State<SharedService<R, D>>) -> Response
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    success(StatusCode::OK, service.catalog(), None)
}

pub(crate) async fn definition_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    Path(assessment_type): Path<String>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let kind: AssessmentType = assessment_type
        .parse()
        .map_err(|_| ApiError::not_found("Assessment not found"))?;
    Ok(success(StatusCode::OK, service.definition(kind), None))
}

pub(crate) async fn access_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
    Path(assessment_type): Path<String>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    let kind = parse_type(&assessment_type)?;
    let view = service.check_access(&user_id, kind)?;
    Ok(success(StatusCode::OK, view, None))
}

pub(crate) async fn submit_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
    payload: Result<Json<AssessmentSubmission>, JsonRejection>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    let Json(submission) = payload.map_err(|rejection| {
        ApiError::new(ErrorCode::ValidationError, "Invalid assessment data")
            .with_details(serde_json::Value::from(rejection.body_text()))
    })?;

    let receipt = service.submit(&user_id, submission)?;
    Ok(success(
        StatusCode::CREATED,
        receipt,
        Some("Assessment submitted successfully"),
    ))
}

pub(crate) async fn get_draft_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
    Query(query): Query<DraftQuery>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    let kind = query.required_type()?;
    let draft = service.draft(&user_id, kind)?;
    Ok(success(StatusCode::OK, draft, None))
}

pub(crate) async fn save_draft_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
    payload: Result<Json<DraftInput>, JsonRejection>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    let Json(input) = payload.map_err(|rejection| {
        ApiError::new(ErrorCode::ValidationError, "Invalid draft data")
            .with_details(serde_json::Value::from(rejection.body_text()))
    })?;

    let draft = service.save_draft(&user_id, input)?;
    Ok(success(StatusCode::OK, draft, Some("Draft saved")))
}

pub(crate) async fn delete_draft_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
    Query(query): Query<DraftQuery>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    let kind = query.required_type()?;
    let deleted = service.delete_draft(&user_id, kind)?;
    Ok(success(
        StatusCode::OK,
        serde_json::json!({ "deleted": deleted }),
        Some("Draft deleted"),
    ))
}

pub(crate) async fn record_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
    Path(assessment_id): Path<String>,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    let id: AssessmentId = assessment_id
        .parse()
        .map_err(|_| ApiError::not_found("Assessment not found"))?;
    let detail = service.record(&user_id, &id)?;
    Ok(success(StatusCode::OK, detail, None))
}

pub(crate) async fn unlocks_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    Ok(success(StatusCode::OK, service.unlock_status(&user_id)?, None))
}

pub(crate) async fn progress_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    Ok(success(
        StatusCode::OK,
        service.progress_summary(&user_id)?,
        None,
    ))
}

pub(crate) async fn history_handler<R, D>(
    State(service): State<SharedService<R, D>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    R: AssessmentRepository + 'static,
    D: DraftRepository + 'static,
{
    let user_id = current_user(&headers)?;
    Ok(success(StatusCode::OK, service.history(&user_id)?, None))
}
