//! `Transport` backed by `reqwest`.
//!
//! One `reqwest::Client` is shared by every request made through a session.
//! A semaphore caps requests in flight at `ClientConfig::max_connections`.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Default `Transport`: a pooled `reqwest::Client` behind a request cap.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    permits: Arc<Semaphore>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(config.max_connections);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let http = builder.build().map_err(|e| ApiError::Network {
            url: config.origin.clone(),
            source: Box::new(e),
        })?;
        Ok(Self::from_client(http, config.max_connections))
    }

    /// Wrap an existing client, allowing `max_connections` requests at once.
    pub fn from_client(http: reqwest::Client, max_connections: usize) -> Self {
        Self {
            http,
            permits: Arc::new(Semaphore::new(max_connections.max(1))),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let network = |e: Box<dyn std::error::Error + Send + Sync>| ApiError::Network {
            url: request.url.clone(),
            source: e,
        };

        let _permit = self.permits.acquire().await.map_err(|e| network(Box::new(e)))?;

        let mut req = self.http.get(&request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        let resp = req.send().await.map_err(|e| network(Box::new(e)))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| network(Box::new(e)))?;

        Ok(HttpResponse {
            url: request.url.clone(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
