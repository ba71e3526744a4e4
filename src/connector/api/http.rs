use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{DomainError, SymptomQuery};

use super::Container;

#[derive(Deserialize)]
struct AdviceRequest {
    #[serde(default)]
    symptoms: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Build the advice service's axum application.
///
/// One route: `POST /api/advice`. Every other method on the path gets a 405
/// with a JSON body, matching the error contract of the POST handler.
pub fn app(container: Arc<Container>) -> Router {
    Router::new()
        .route("/api/advice", post(advice).fallback(method_not_allowed))
        .with_state(container)
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// `Received → Validating-Input → Checking-Config → pipeline → Responded`.
///
/// The body is parsed leniently: anything that is not a JSON object carrying
/// a non-blank `symptoms` string is a 400. The credential check runs before
/// the upstream call so a missing key fails fast. Symptom content is never
/// logged, only its length.
async fn advice(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    let symptoms = serde_json::from_slice::<AdviceRequest>(&body)
        .ok()
        .and_then(|request| request.symptoms)
        .map(SymptomQuery::new)
        .filter(|query| !query.is_blank());

    let Some(symptoms) = symptoms else {
        return error_response(StatusCode::BAD_REQUEST, "Symptoms are required");
    };

    if !container.is_configured() {
        warn!("Advice request rejected: no provider credential configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "API key not configured");
    }

    info!("Advice request received ({} bytes of symptom text)", symptoms.len());

    match container.triage_use_case().execute(&symptoms).await {
        Ok(advice) => (StatusCode::OK, Json(advice)).into_response(),
        Err(e) => {
            warn!("Advice request failed: {e}");
            error_from_domain(e)
        }
    }
}

fn error_from_domain(error: DomainError) -> Response {
    let status = match error {
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
        .into_response()
}
