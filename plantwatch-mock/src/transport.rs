use std::time::Duration;

use async_trait::async_trait;
use plantwatch_api::models::Reading;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::Error;
use crate::settings::Endpoint;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("apikey");
const PREFER_HEADER: HeaderName = HeaderName::from_static("prefer");

/// Failure to obtain any response from the endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Status and body of whatever the endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one request carrying `reading`.
    async fn deliver(&self, reading: &Reading) -> Result<Response, TransportError>;
}

/// JSON over HTTP to the readings resource.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &Endpoint) -> Result<Self, Error> {
        Self::build(&endpoint.url, &endpoint.resource, &endpoint.api_key, Duration::from_secs(endpoint.timeout_secs))
    }

    pub fn build(base_url: &str, resource: &str, api_key: &str, timeout: Duration) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {api_key}"))?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(PREFER_HEADER, HeaderValue::from_static("return=minimal"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let url = format!("{}/{}", base_url.trim_end_matches('/'), resource.trim_start_matches('/'));

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn deliver(&self, reading: &Reading) -> Result<Response, TransportError> {
        tracing::debug!("Send: {:?}", reading);

        let response = self.client.post(&self.url).json(reading).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let timeout = Duration::from_secs(10);

        let transport = HttpTransport::build("http://localhost:54321/", "/rest/v1/readings", "key", timeout).unwrap();
        assert_eq!(transport.url(), "http://localhost:54321/rest/v1/readings");

        let transport = HttpTransport::build("http://localhost:54321", "rest/v1/readings", "key", timeout).unwrap();
        assert_eq!(transport.url(), "http://localhost:54321/rest/v1/readings");
    }

    #[test]
    fn test_rejects_unprintable_credential() {
        let result = HttpTransport::build("http://localhost", "/rest/v1/readings", "bad\nkey", Duration::from_secs(1));

        assert!(matches!(result, Err(Error::InvalidCredential(_))));
    }
}
