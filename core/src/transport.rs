//! `HttpRequester` backed by `reqwest`.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpRequester, HttpResponse};

/// Async transport over a pooled `reqwest::Client`.
///
/// Every status is returned as data. Timeouts and connection failures
/// become `ApiError::Transport` for the call that hit them; a URL reqwest
/// cannot parse becomes `ApiError::InvalidUrl`.
#[derive(Debug, Clone)]
pub struct ReqwestRequester {
    client: reqwest::Client,
}

impl ReqwestRequester {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl HttpRequester for ReqwestRequester {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&request.url, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&request.url, e))?;
        debug!(method = request.method.as_str(), url = %request.url, status, "request completed");

        Ok(HttpResponse::new(status, body))
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::InvalidUrl(url.to_string())
    } else if err.is_timeout() {
        ApiError::Transport(format!("timed out: {err}"))
    } else {
        ApiError::Transport(err.to_string())
    }
}
