//! Stand-in for the Hakush origin.
//!
//! Serves fixture bodies at upstream paths. A path is answered from the
//! in-memory table first, then from files under the fixture root, and
//! otherwise with 404. Entries can also force a status to exercise error
//! handling.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Uri},
    response::{IntoResponse, Response},
    Router,
};
use bytes::Bytes;
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

#[derive(Clone, Debug)]
enum Entry {
    Body(Bytes),
    Status(StatusCode),
}

#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    entries: HashMap<String, Entry>,
    root: Option<PathBuf>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve files under `root`, mapping `/hsr/new.json` to `root/hsr/new.json`.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            entries: HashMap::new(),
            root: Some(root.into()),
        }
    }

    pub fn with_body(mut self, path: &str, body: impl Into<Bytes>) -> Self {
        self.entries.insert(path.to_string(), Entry::Body(body.into()));
        self
    }

    /// Answer `path` with `status` and an empty body.
    pub fn with_status(mut self, path: &str, status: StatusCode) -> Self {
        self.entries.insert(path.to_string(), Entry::Status(status));
        self
    }

    async fn lookup(&self, path: &str) -> Result<Bytes, StatusCode> {
        match self.entries.get(path) {
            Some(Entry::Body(body)) => return Ok(body.clone()),
            Some(Entry::Status(status)) => return Err(*status),
            None => {}
        }
        let root = self.root.as_ref().ok_or(StatusCode::NOT_FOUND)?;
        let file = resolve(root, path).ok_or(StatusCode::NOT_FOUND)?;
        tokio::fs::read(file)
            .await
            .map(Bytes::from)
            .map_err(|_| StatusCode::NOT_FOUND)
    }
}

/// Join a request path onto `root`, refusing anything but plain segments.
fn resolve(root: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative.as_os_str().is_empty() {
        return None;
    }
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(relative))
}

fn content_type(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("json") => "application/json",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

pub fn app(fixtures: Fixtures) -> Router {
    Router::new()
        .fallback(serve_fixture)
        .with_state(Arc::new(fixtures))
}

pub async fn run(listener: TcpListener, fixtures: Fixtures) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixtures)).await
}

async fn serve_fixture(State(fixtures): State<Arc<Fixtures>>, uri: Uri) -> Response {
    let path = uri.path();
    match fixtures.lookup(path).await {
        Ok(body) => {
            tracing::debug!(path, "served fixture");
            ([(header::CONTENT_TYPE, content_type(path))], Body::from(body)).into_response()
        }
        Err(status) => {
            tracing::debug!(path, %status, "no fixture");
            status.into_response()
        }
    }
}
