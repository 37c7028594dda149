//! HTTP implementation of the draft service contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{DraftService, ServiceError, ServiceResult};
use crate::{
    error::ServiceErrorKind,
    models::{Campaign, Draft},
};

/// Default per-request timeout.
///
/// A hung call must not hold the caller's single-flight save lock forever,
/// so every request carries an explicit deadline; a timed-out request
/// classifies as a network failure and is retried by the next save.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Draft service client over the backend's REST endpoints.
///
/// Endpoints: `POST /drafts`, `PUT /drafts/{id}`, `GET /drafts/{id}`,
/// `GET /drafts`, `POST /drafts/{id}/publish`, `POST /campaigns`.
pub struct HttpDraftService {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

/// Builder for creating and configuring [`HttpDraftService`] instances.
#[derive(Debug, Clone)]
pub struct HttpDraftServiceBuilder {
    base_url: String,
    bearer_token: Option<String>,
    timeout: Duration,
}

impl HttpDraftServiceBuilder {
    /// Creates a builder for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the bearer token attached to every request.
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured client.
    pub fn build(self) -> ServiceResult<HttpDraftService> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                ServiceError::new(
                    ServiceErrorKind::Network,
                    format!("Failed to build HTTP client: {e}"),
                )
            })?;

        Ok(HttpDraftService {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            bearer_token: self.bearer_token,
        })
    }
}

impl HttpDraftService {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Serializes a draft for the wire, dropping client-local fields.
    fn wire_payload(draft: &Draft) -> ServiceResult<serde_json::Value> {
        let mut value = serde_json::to_value(draft).map_err(|e| {
            ServiceError::new(
                ServiceErrorKind::ServerError,
                format!("Failed to serialize draft: {e}"),
            )
        })?;
        if let Some(object) = value.as_object_mut() {
            object.remove("local_key");
        }
        Ok(value)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ServiceResult<T> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(classify_transport)?;

        Self::decode(check_status(response)?).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
        response.json::<T>().await.map_err(|e| {
            ServiceError::new(
                ServiceErrorKind::ServerError,
                format!("Malformed response body: {e}"),
            )
        })
    }
}

/// Maps a non-2xx status to the service error taxonomy.
fn classify_status(status: StatusCode) -> ServiceErrorKind {
    match status {
        StatusCode::NOT_FOUND => ServiceErrorKind::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceErrorKind::Forbidden,
        s if s.is_server_error() => ServiceErrorKind::ServerError,
        _ => ServiceErrorKind::ServerError,
    }
}

fn classify_transport(e: reqwest::Error) -> ServiceError {
    ServiceError::new(ServiceErrorKind::Network, e.to_string())
}

fn check_status(response: Response) -> ServiceResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ServiceError::new(
            classify_status(status),
            format!("Backend returned {status}"),
        ))
    }
}

#[async_trait]
impl DraftService for HttpDraftService {
    async fn create(&self, draft: &Draft) -> ServiceResult<Draft> {
        let payload = Self::wire_payload(draft)?;
        self.send(self.client.post(self.url("/drafts")).json(&payload))
            .await
    }

    async fn update(&self, id: &str, draft: &Draft) -> ServiceResult<Draft> {
        let payload = Self::wire_payload(draft)?;
        self.send(
            self.client
                .put(self.url(&format!("/drafts/{id}")))
                .json(&payload),
        )
        .await
    }

    async fn fetch(&self, id: &str) -> ServiceResult<Draft> {
        self.send(self.client.get(self.url(&format!("/drafts/{id}"))))
            .await
    }

    async fn list(&self) -> ServiceResult<Vec<Draft>> {
        self.send(self.client.get(self.url("/drafts"))).await
    }

    async fn publish(&self, id: &str) -> ServiceResult<Campaign> {
        self.send(self.client.post(self.url(&format!("/drafts/{id}/publish"))))
            .await
    }

    async fn create_campaign(&self, draft: &Draft) -> ServiceResult<Campaign> {
        let payload = Self::wire_payload(draft)?;
        self.send(self.client.post(self.url("/campaigns")).json(&payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(
            classify_status(StatusCode::NOT_FOUND),
            ServiceErrorKind::NotFound
        );
        assert_eq!(
            classify_status(StatusCode::UNAUTHORIZED),
            ServiceErrorKind::Forbidden
        );
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN),
            ServiceErrorKind::Forbidden
        );
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            ServiceErrorKind::ServerError
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY),
            ServiceErrorKind::ServerError
        );
    }

    #[test]
    fn wire_payload_strips_local_key() {
        let mut draft = Draft::new("founder-1");
        draft.local_key = Some("local-abc".to_string());
        draft.step_data.basics.title = "EcoCharge".to_string();

        let payload = HttpDraftService::wire_payload(&draft).expect("payload");
        assert!(payload.get("local_key").is_none());
        assert_eq!(
            payload["step_data"]["basics"]["title"],
            serde_json::json!("EcoCharge")
        );
    }

    #[test]
    fn builder_normalizes_trailing_slash() {
        let service = HttpDraftServiceBuilder::new("http://localhost:8080/")
            .build()
            .expect("client");
        assert_eq!(service.url("/drafts"), "http://localhost:8080/drafts");
    }
}
