//! Logplex HTTP client for API interactions

use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{LogplexError, Result};
use crate::logplex::settings::{Settings, TransportOptions};

/// Logplex API client
pub struct LogplexClient {
    client: Client,
    endpoint: String,
    auth_key: String,
}

impl LogplexClient {
    /// Create a client from resolved settings
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_transport(
            settings.endpoint.clone(),
            settings.auth_key.clone(),
            settings.transport(),
        )
    }

    /// Create a client for an endpoint with explicit transport options
    pub fn with_transport(
        endpoint: String,
        auth_key: String,
        transport: TransportOptions,
    ) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(transport.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth_key,
        })
    }

    /// Endpoint all paths are resolved against
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build a full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Value of the Authorization header (key used verbatim)
    fn authorization(&self) -> String {
        format!("{} {}", api::AUTH_SCHEME, self.auth_key)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(AUTHORIZATION, self.authorization())
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("POST {}", url);
        self.with_headers(self.client.post(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("DELETE {}", url);
        self.with_headers(self.client.delete(url))
    }

    /// Fail unless the response carries exactly the expected status.
    ///
    /// On mismatch the body is drained and logged before the error is returned.
    pub(crate) async fn expect_status(
        &self,
        response: Response,
        expected: StatusCode,
        context: &str,
    ) -> Result<Response> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Unexpected response {} for '{}': {}", status, context, body);
        Err(LogplexError::Api {
            status,
            context: context.to_string(),
        })
    }

    /// Read the full body and decode it as JSON
    pub(crate) async fn parse_json<T>(&self, response: Response, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            LogplexError::Json(format!("Failed to decode response to {}: {}", context, e))
        })
    }

    /// Read and discard the body so the exchange completes cleanly
    pub(crate) async fn discard_body(&self, response: Response) -> Result<()> {
        let body = response.bytes().await?;
        debug!("Discarded {} byte response body", body.len());
        Ok(())
    }
}

#[cfg(test)]
impl LogplexClient {
    /// Client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_transport(
            base_url.to_string(),
            "test-key".to_string(),
            TransportOptions::default(),
        )
        .expect("test client")
    }
}
