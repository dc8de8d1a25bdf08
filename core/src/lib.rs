//! Typed client for the Hakush Honkai: Star Rail content API.
//!
//! # Overview
//! Fetches character, light cone, relic, item, monster and achievement
//! documents plus image assets, and validates every document into a typed
//! record. Asset paths for eidolons, relic sets and relic pieces are derived
//! from composite ids.
//!
//! # Design
//! - `HakushClient` is stateless: `build_*` methods produce an
//!   `HttpRequest`, `parse_*` methods consume an `HttpResponse`. No I/O.
//! - `HakushSession` pairs a client with a `Transport` and exposes one async
//!   method per endpoint. `ReqwestTransport` is the default transport.
//! - `schema` holds every record and the single JSON → record boundary.
//! - `id` holds `ResourceId` (numeric or digit-string ids) and the composite
//!   id decomposition rules.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod id;
pub mod schema;
pub mod session;
#[cfg(feature = "reqwest-client")]
pub mod transport;

pub use client::HakushClient;
pub use config::{ClientConfig, Language};
pub use error::{ApiError, ConfigError, IdError, SchemaError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use id::{RankImageId, RelicPieceId, RelicSetRef, ResourceId};
pub use schema::Schema;
pub use session::HakushSession;
#[cfg(feature = "reqwest-client")]
pub use transport::ReqwestTransport;
