//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `HakushClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. A `Transport` executes the GET in
//! between. The upstream API is read-only, so every request is a GET and
//! carries no body.
//!
//! Bodies are kept as raw bytes: JSON documents and image assets travel
//! through the same response type.

use std::future::Future;

use crate::error::ApiError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL, origin included.
    pub url: String,
    /// Origin-relative path, e.g. `/hsr/data/character.json`.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// URL the response was served for.
    pub url: String,
    pub status: u16,
    /// Reason phrase for `status`, e.g. `Not Found`. May be empty.
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single GET against the origin.
///
/// Implementations must return non-2xx responses as data, not as errors;
/// status interpretation belongs to `HakushClient`. `Err` is reserved for
/// exchanges that never produced a response (connection refused, TLS
/// failure, body read error) and should use `ApiError::Network`.
pub trait Transport: Send + Sync {
    fn get(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}
