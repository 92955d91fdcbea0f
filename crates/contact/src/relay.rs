use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ContactMessage;

/// Error surfaced by the submission client. The form controller treats
/// every variant identically: the attempt failed and may be retried.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay responded with status {0}")]
    Status(StatusCode),
}

/// Parsed body the relay returns for an accepted submission. Unknown
/// fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelayReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Seam between the form controller and the outbound HTTP call, so tests
/// can substitute a scripted transport.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> Result<RelayReceipt, SubmissionError>;
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    access_key: &'a str,
}

/// HTTP client for the third-party form relay.
///
/// One best-effort POST to `{base_url}/submit` per call; no retries, no
/// caching. Retry policy, if any, belongs to the caller.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
    access_key: String,
}

impl RelayClient {
    /// `base_url` is the origin of the relay service; the `/submit` path
    /// is appended here. `access_key` is the deploy-time site credential,
    /// never user input.
    pub fn new(base_url: &str, access_key: impl Into<String>) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(&format!("{}/submit", base_url.trim_end_matches('/')))?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            access_key: access_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for RelayClient {
    async fn submit(&self, message: &ContactMessage) -> Result<RelayReceipt, SubmissionError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&RelayPayload {
                name: &message.name,
                email: &message.email,
                subject: &message.subject,
                message: &message.message,
                access_key: &self.access_key,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status));
        }

        Ok(response.json().await?)
    }
}
