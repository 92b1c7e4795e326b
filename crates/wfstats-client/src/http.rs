//! HTTP layer: request construction, bearer auth and status mapping.
//!
//! This is the ONLY place for status code handling. Callers never
//! interpret status codes.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::auth::TokenProvider;
use crate::error::{ClientError, ClientResult};

pub const USER_AGENT_VALUE: &str = concat!("wfstats/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt carried in an error message.
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) token_provider: TokenProvider,
}

impl HttpBackend {
    pub(crate) fn new(timeout_secs: u64, token_provider: TokenProvider) -> ClientResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ClientError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            token_provider,
        })
    }

    /// Send one request; non-2xx statuses become errors.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> ClientResult<reqwest::Response> {
        debug!(method = %method, url = %url, "sending request");

        let mut request = self.client.request(method, url.clone());
        if let Some(token) = self.token_provider.get_token(&self.client).await? {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .map(|body| excerpt(&body))
            .unwrap_or_else(|_| status.to_string());

        match status.as_u16() {
            401 | 403 => Err(ClientError::Unauthorized { message }),
            404 => Err(ClientError::NotFound {
                what: url.to_string(),
            }),
            code => Err(ClientError::Http {
                status: code,
                url: url.to_string(),
                message,
            }),
        }
    }

    /// Send and parse the body as JSON.
    pub(crate) async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> ClientResult<T> {
        let response = self.request(method, url, body).await?;
        let text = response.text().await.map_err(|e| ClientError::Network {
            message: format!("failed to read response body: {}", e),
        })?;
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse {
            message: format!("failed to parse response from {}: {}", url, e),
        })
    }
}

/// `base` with `segments` appended, each percent-encoded.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> ClientResult<Url> {
    let mut url = Url::parse(base).map_err(|e| ClientError::Config {
        message: format!("invalid base URL '{}': {}", base, e),
    })?;
    url.path_segments_mut()
        .map_err(|_| ClientError::Config {
            message: format!("base URL '{}' cannot carry a path", base),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn excerpt(body: &str) -> String {
    if body.is_empty() {
        "empty response body".to_string()
    } else {
        body.chars().take(ERROR_BODY_LIMIT).collect()
    }
}
