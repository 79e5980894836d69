//! Shared fixtures for client tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chronicle_client::{ApiClient, ApiRequest, ApiResponse, ClientError, Result, Transport};
use http::Method;

pub const API: &str = "http://api.test";

#[derive(Default)]
struct Inner {
    responses: VecDeque<Result<ApiResponse>>,
    requests: Vec<ApiRequest>,
}

/// In-memory transport answering from a queue and recording every request.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a network failure.
    pub fn fail(&self, message: &str) -> &Self {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Err(ClientError::transport(message)));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    /// Number of recorded requests with this method and URL.
    pub fn count(&self, method: Method, url: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn client(&self) -> ApiClient<MockTransport> {
        ApiClient::with_transport(API, self.clone())
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no response queued")))
    }
}

pub fn article_json(id: &str, headline: &str, status: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "headline": "{headline}",
            "content": "Local man wins argument.\n\nHe is still talking.",
            "author": "AI Desk",
            "status": "{status}",
            "created_at": "2024-03-05T10:15:00Z",
            "category": "World"
        }}"#
    )
}

pub fn list_json(items: &[(&str, &str, &str)]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|(id, headline, status)| article_json(id, headline, status))
        .collect();
    format!("[{}]", items.join(","))
}
