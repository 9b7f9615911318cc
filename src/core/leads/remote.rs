//! Insert-only client for the hosted HR users table.
//!
//! Speaks the PostgREST dialect used by hosted table services: one
//! `POST {base}/rest/v1/{table}` per lead, authenticated by the API key.

use std::time::Duration;

use reqwest::StatusCode;

use crate::core::LeadRecord;
use crate::core::config::Config;

/// Longest response body kept in a rejection error
const MAX_ERROR_BODY: usize = 500;

/// Upper bound on one insert, connect through response
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum RemoteTableError {
    #[error("Request to table service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Table service rejected the insert ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Handle to the remote table. Cheap to clone.
#[derive(Clone, Debug)]
pub struct RemoteTable {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
    timeout: Duration,
}

impl RemoteTable {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: table.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the per-insert timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from config, or `None` when lead capture is not configured
    pub fn from_config(config: &Config) -> Option<Self> {
        match (&config.leads_api_url, &config.leads_api_key) {
            (Some(url), Some(key)) => Some(
                Self::new(url, key, &config.leads_table)
                    .with_timeout(Duration::from_secs(config.leads_timeout_seconds)),
            ),
            _ => None,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Endpoint that receives inserts
    pub fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Insert one lead as a new row
    pub async fn insert(&self, lead: &LeadRecord) -> Result<(), RemoteTableError> {
        let response = self
            .client
            .post(self.insert_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .timeout(self.timeout)
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }

        Err(RemoteTableError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_LEADS_TABLE;
    use httpmock::prelude::*;
    use serde_json::json;

    fn jane() -> LeadRecord {
        LeadRecord::new("Jane", "Doe", "jane@acme.com", "Acme")
    }

    #[test]
    fn test_insert_url_trims_trailing_slash() {
        let table = RemoteTable::new("https://example.supabase.co/", "key", "hr_users");
        assert_eq!(
            table.insert_url(),
            "https://example.supabase.co/rest/v1/hr_users"
        );
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let mut config = Config {
            leads_api_url: Some("https://example.supabase.co".to_string()),
            leads_api_key: None,
            leads_table: DEFAULT_LEADS_TABLE.to_string(),
            leads_timeout_seconds: 4,
        };
        assert!(RemoteTable::from_config(&config).is_none());

        config.leads_api_key = Some("key".to_string());
        let table = RemoteTable::from_config(&config).unwrap();
        assert_eq!(table.table(), "hr_users");
        assert_eq!(table.timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_default_timeout_is_bounded() {
        let table = RemoteTable::new("https://example.supabase.co", "key", "hr_users");
        assert_eq!(table.timeout(), DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(
            DEFAULT_REQUEST_TIMEOUT,
            Duration::from_secs(crate::core::config::DEFAULT_LEADS_TIMEOUT_SECONDS)
        );
        // The browser waits longer than the server
        assert!(
            DEFAULT_REQUEST_TIMEOUT < Duration::from_millis(crate::core::SUBMIT_TIMEOUT_MS.into())
        );
    }

    #[tokio::test]
    async fn test_stalled_service_times_out_as_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users");
                then.status(201).delay(Duration::from_secs(10));
            })
            .await;

        let table = RemoteTable::new(server.base_url(), "anon-key", "hr_users")
            .with_timeout(Duration::from_millis(200));

        let err = tokio::time::timeout(Duration::from_secs(5), table.insert(&jane()))
            .await
            .expect("insert should give up on its own")
            .unwrap_err();

        match err {
            RemoteTableError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_sends_row_with_credentials() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rest/v1/hr_users")
                    .header("apikey", "anon-key")
                    .header("authorization", "Bearer anon-key")
                    .header("prefer", "return=minimal")
                    .json_body(json!({
                        "first_name": "Jane",
                        "last_name": "Doe",
                        "email": "jane@acme.com",
                        "company_name": "Acme"
                    }));
                then.status(201);
            })
            .await;

        let table = RemoteTable::new(server.base_url(), "anon-key", "hr_users");
        table.insert(&jane()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_keeps_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users");
                then.status(409)
                    .body(r#"{"message":"duplicate key value violates unique constraint"}"#);
            })
            .await;

        let table = RemoteTable::new(server.base_url(), "anon-key", "hr_users");
        let err = table.insert(&jane()).await.unwrap_err();

        match err {
            RemoteTableError::Rejected { status, body } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert!(body.contains("duplicate key"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_long_rejection_body_is_truncated() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1/hr_users");
                then.status(500).body("x".repeat(2000));
            })
            .await;

        let table = RemoteTable::new(server.base_url(), "anon-key", "hr_users");
        match table.insert(&jane()).await {
            Err(RemoteTableError::Rejected { body, .. }) => assert_eq!(body.len(), 500),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) is not served locally
        let table = RemoteTable::new("http://127.0.0.1:9", "anon-key", "hr_users");
        let err = table.insert(&jane()).await.unwrap_err();
        assert!(matches!(err, RemoteTableError::Transport(_)));
    }
}
