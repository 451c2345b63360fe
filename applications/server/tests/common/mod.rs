//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use soft_core::Track;
use soft_server::{api, AppState, Result, ServerError, TrackSource};
use std::sync::{Arc, Mutex};

/// Build the router around `source`
pub fn create_test_app(source: Arc<dyn TrackSource>, limit: usize) -> Router {
    api::create_router(AppState::new(source, limit))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Source returning `count` numbered tracks and recording every term
pub struct StubSource {
    pub count: usize,
    pub terms: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new(count: usize) -> Arc<Self> {
        Arc::new(Self {
            count,
            terms: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TrackSource for StubSource {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn search(&self, term: &str, _limit: usize) -> Result<Vec<Track>> {
        self.terms.lock().unwrap().push(term.to_string());
        Ok((0..self.count)
            .map(|i| Track::new(format!("{term} {i}"), "Stub Artist", 200))
            .collect())
    }
}

/// Source that always fails
pub struct BrokenSource;

#[async_trait]
impl TrackSource for BrokenSource {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn search(&self, _term: &str, _limit: usize) -> Result<Vec<Track>> {
        Err(ServerError::Source("upstream timed out".to_string()))
    }
}
