use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::AssessmentError;
use super::pipeline::AssessmentSubmission;
use super::repository::{AssessmentId, AssessmentStore, StoreError};
use super::service::{AssessmentService, AssessmentServiceError};
use super::views::OrderSubmission;

/// Router builder exposing submission, result, and order endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: AssessmentStore + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<S>))
        .route("/api/v1/assessments/:assessment_id", get(result_handler::<S>))
        .route(
            "/api/v1/assessments/:assessment_id/orders",
            post(order_handler::<S>),
        )
        .with_state(service)
}

fn error_response(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (error.status_code(), axum::Json(payload)).into_response()
}

fn unknown_id(raw: &str) -> Response {
    let payload = json!({
        "error": format!("unknown assessment id: {raw}"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

/// Runs a service call on the blocking pool; stores may do file I/O under a
/// mutex.
async fn on_blocking_pool<S, T, F>(
    service: Arc<AssessmentService<S>>,
    work: F,
) -> Result<T, AssessmentServiceError>
where
    S: AssessmentStore + 'static,
    T: Send + 'static,
    F: FnOnce(&AssessmentService<S>) -> Result<T, AssessmentServiceError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || work(&service))
        .await
        .map_err(|err| StoreError::Unavailable(format!("blocking task failed: {err}")))?
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    body: Bytes,
) -> Response
where
    S: AssessmentStore + 'static,
{
    let submission = match serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(|err| AssessmentError::MalformedSubmission(err.to_string()))
        .and_then(AssessmentSubmission::from_json)
    {
        Ok(submission) => submission,
        Err(error) => return error_response(error.into()),
    };

    let outcome = on_blocking_pool(service, move |service| service.submit(submission)).await;

    match outcome {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.receipt())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn result_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    S: AssessmentStore + 'static,
{
    let Ok(id) = assessment_id.parse::<AssessmentId>() else {
        return unknown_id(&assessment_id);
    };

    match on_blocking_pool(service, move |service| service.result_view(&id)).await {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn order_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(assessment_id): Path<String>,
    body: Bytes,
) -> Response
where
    S: AssessmentStore + 'static,
{
    let Ok(id) = assessment_id.parse::<AssessmentId>() else {
        return unknown_id(&assessment_id);
    };

    let order = match serde_json::from_slice::<OrderSubmission>(&body) {
        Ok(order) => order,
        Err(err) => {
            return error_response(AssessmentServiceError::MalformedOrder(err.to_string()))
        }
    };

    let outcome =
        on_blocking_pool(service, move |service| service.record_order(&id, order)).await;

    match outcome {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}
