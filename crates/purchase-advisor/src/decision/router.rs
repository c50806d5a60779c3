use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::{
    catalog, rational_checklist, weight_profiles, DecisionEngine, EvaluationRequest,
};

/// Router builder exposing the evaluation and reference-data endpoints.
pub fn decision_router(engine: Arc<DecisionEngine>) -> Router {
    Router::new()
        .route("/api/v1/decisions/evaluate", post(evaluate_handler))
        .route("/api/v1/decisions/catalog", get(catalog_handler))
        .route("/api/v1/decisions/profiles", get(profiles_handler))
        .route("/api/v1/decisions/checklist", get(checklist_handler))
        .with_state(engine)
}

/// Body rejections and validation failures share the `{"error": ...}` shape.
pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<DecisionEngine>>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };

    match engine.evaluate_request(&request, Local::now().date_naive()) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string()),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, Json(catalog())).into_response()
}

pub(crate) async fn profiles_handler() -> Response {
    (StatusCode::OK, Json(weight_profiles())).into_response()
}

pub(crate) async fn checklist_handler() -> Response {
    (StatusCode::OK, Json(rational_checklist())).into_response()
}
