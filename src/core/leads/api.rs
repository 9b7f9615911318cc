//! Lead capture API endpoint
//!
//! - POST /api/leads - Validate a lead and insert it into the remote table

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use std::sync::Arc;

use super::remote::RemoteTable;
use crate::core::{LeadError, LeadRecord};

/// Lead API state; `remote` is `None` when capture is not configured
#[derive(Clone, Default)]
pub struct LeadsApiState {
    pub remote: Option<RemoteTable>,
}

impl LeadsApiState {
    pub fn new(remote: Option<RemoteTable>) -> Self {
        Self { remote }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Failures of the leads endpoint
#[derive(Debug)]
pub enum LeadsApiError {
    /// Body is not a JSON lead record
    Malformed(JsonRejection),
    Invalid(LeadError),
    NotConfigured,
    Upstream,
}

impl IntoResponse for LeadsApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            LeadsApiError::Malformed(rejection) => (
                rejection.status(),
                ApiError::new(rejection.body_text(), "INVALID_BODY"),
            ),
            LeadsApiError::Invalid(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new(err.to_string(), err.code()),
            ),
            LeadsApiError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("Lead capture is not configured", "NOT_CONFIGURED"),
            ),
            // Upstream details stay in the server log
            LeadsApiError::Upstream => (
                StatusCode::BAD_GATEWAY,
                ApiError::new(
                    LeadError::SubmissionFailure.to_string(),
                    LeadError::SubmissionFailure.code(),
                ),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Create the leads API router
pub fn leads_router(state: LeadsApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/leads", post(create_lead_handler))
        .with_state(state)
}

/// POST /api/leads
async fn create_lead_handler(
    State(state): State<Arc<LeadsApiState>>,
    payload: Result<Json<LeadRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse>), LeadsApiError> {
    let Json(lead) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable lead body: {}", rejection);
        LeadsApiError::Malformed(rejection)
    })?;

    if let Err(err) = lead.validate() {
        tracing::debug!("Rejected lead: {}", err);
        return Err(LeadsApiError::Invalid(err));
    }

    let Some(remote) = state.remote.as_ref() else {
        tracing::warn!("Lead received but LEADS_API_URL/LEADS_API_KEY are not set");
        return Err(LeadsApiError::NotConfigured);
    };

    if let Err(err) = remote.insert(&lead).await {
        tracing::error!("Failed to store lead in {}: {}", remote.table(), err);
        return Err(LeadsApiError::Upstream);
    }

    tracing::info!("Lead captured for company: {}", lead.company_name);

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            success: true,
            message: "Lead captured".to_string(),
        }),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use httpmock::prelude::*;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    fn lead_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn jane() -> Value {
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@acme.com",
            "company_name": "Acme"
        })
    }

    fn remote_at(server: &MockServer) -> RemoteTable {
        RemoteTable::new(server.base_url(), "anon-key", "hr_users")
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let app = leads_router(LeadsApiState::default());
        let mut body = jane();
        body["last_name"] = json!("");

        let response = app.oneshot(lead_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "MISSING_FIELD");
    }

    #[tokio::test]
    async fn test_absent_field_is_reported_as_missing() {
        let app = leads_router(LeadsApiState::default());
        let body = json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@acme.com"
        });

        let response = app.oneshot(lead_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["code"], "MISSING_FIELD");
        assert_eq!(body["error"], "Company Name is required");
    }

    #[tokio::test]
    async fn test_invalid_email_is_unprocessable() {
        let app = leads_router(LeadsApiState::default());
        let mut body = jane();
        body["email"] = json!("a.b.com");

        let response = app.oneshot(lead_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "INVALID_EMAIL");
    }

    #[tokio::test]
    async fn test_unconfigured_capture_is_unavailable() {
        let app = leads_router(LeadsApiState::default());

        let response = app.oneshot(lead_request(jane())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["code"], "NOT_CONFIGURED");
    }

    #[tokio::test]
    async fn test_valid_lead_is_stored_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users").json_body(jane());
                then.status(201);
            })
            .await;

        let remote = remote_at(&server);
        let app = leads_router(LeadsApiState::new(Some(remote)));

        let response = app.oneshot(lead_request(jane())).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["success"], true);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_invalid_lead_never_reaches_remote() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users");
                then.status(201);
            })
            .await;

        let remote = remote_at(&server);
        let app = leads_router(LeadsApiState::new(Some(remote)));
        let mut body = jane();
        body["email"] = json!("a@b");

        let response = app.oneshot(lead_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_null_field_gets_json_error() {
        let app = leads_router(LeadsApiState::default());
        let mut body = jane();
        body["email"] = Value::Null;

        let response = app.oneshot(lead_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_malformed_json_gets_json_error() {
        let app = leads_router(LeadsApiState::default());
        let request = Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"first_name\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_BODY");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_gets_json_error() {
        let app = leads_router(LeadsApiState::default());
        let request = Request::builder()
            .method("POST")
            .uri("/api/leads")
            .body(Body::from(jane().to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body_json(response).await["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_stalled_remote_is_bad_gateway() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users");
                then.status(201).delay(Duration::from_secs(10));
            })
            .await;

        let remote = remote_at(&server).with_timeout(Duration::from_millis(200));
        let app = leads_router(LeadsApiState::new(Some(remote)));

        let response = tokio::time::timeout(
            Duration::from_secs(5),
            app.oneshot(lead_request(jane())),
        )
        .await
        .expect("handler should answer once the insert times out")
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["code"], "SUBMISSION_FAILED");
    }

    #[tokio::test]
    async fn test_remote_failure_is_generic_bad_gateway() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users");
                then.status(401).body(r#"{"message":"Invalid API key"}"#);
            })
            .await;

        let remote = RemoteTable::new(server.base_url(), "wrong-key", "hr_users");
        let app = leads_router(LeadsApiState::new(Some(remote)));

        let response = app.oneshot(lead_request(jane())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["code"], "SUBMISSION_FAILED");
        assert!(!body["error"].as_str().unwrap().contains("API key"));
    }
}
