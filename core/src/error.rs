//! Error types for the Hakush API client.
//!
//! # Design
//! Every public operation returns `ApiError`. The variants callers act on
//! most often are `Transport` (the server answered with a non-2xx status)
//! and `Schema` (the server answered, but the document did not match the
//! record). Identifier problems are caught before any request is built and
//! land in `InvalidId`.

use std::error::Error as StdError;

/// Errors returned by `HakushClient` and `HakushSession` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not match the expected record.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// An identifier or asset name was rejected before a request was built.
    #[error(transparent)]
    InvalidId(#[from] IdError),

    /// The transport could not complete the exchange at all.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status carried by a `Transport` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(e) => Some(e.status),
            _ => None,
        }
    }
}

/// A non-2xx HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status} {reason} ({url})")]
pub struct TransportError {
    pub status: u16,
    pub reason: String,
    pub url: String,
}

/// A JSON document that does not satisfy the shape of its target record.
///
/// `path` is the JSON path of the offending value (`"2.Name"`, `"Child[0].Id"`),
/// empty when the document itself is unreadable. For a missing field the path
/// points at the enclosing object and `message` names the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {entity} at `{path}`: {message}")]
pub struct SchemaError {
    pub entity: &'static str,
    pub path: String,
    pub message: String,
}

/// An identifier or name that cannot be turned into a request path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier `{0}` contains non-digit characters")]
    NonDigit(String),

    #[error("identifier `{id}` must be exactly {expected} digits")]
    Length { id: String, expected: usize },

    #[error("identifier `{id}` is not a valid {kind} id")]
    Malformed { id: String, kind: &'static str },

    #[error("icon path `{0}` does not carry an item figure id")]
    IconPath(String),

    #[error("asset name `{0}` must be non-empty ASCII alphanumerics")]
    Name(String),
}

/// Invalid client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value `{value}` for {key}")]
    Value { key: &'static str, value: String },
}
