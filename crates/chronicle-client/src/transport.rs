//! HTTP transport.
//!
//! [`ApiClient`](crate::ApiClient) builds [`ApiRequest`]s and hands them to a
//! [`Transport`]. In the browser that is [`BrowserTransport`] (the Fetch API
//! through `gloo-net`); tests plug in an in-memory one.

use std::future::Future;

use gloo_net::http::Request;
use http::Method;
use web_sys::RequestCache;

use crate::error::{ClientError, Result};

/// A request against the article API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,

    /// Absolute URL without query string.
    pub url: String,

    /// Query parameters, encoded by the transport.
    pub query: Vec<(String, String)>,

    /// Bypass every HTTP cache between us and the API.
    pub no_store: bool,
}

impl ApiRequest {
    /// A `GET` that always goes to the network.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: Vec::new(),
            no_store: true,
        }
    }

    /// A `PATCH` without body.
    pub fn patch(url: impl Into<String>) -> Self {
        Self {
            method: Method::PATCH,
            url: url.into(),
            query: Vec::new(),
            no_store: false,
        }
    }

    /// A `DELETE`.
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            url: url.into(),
            query: Vec::new(),
            no_store: false,
        }
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Status and body of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and returns whatever the server answered.
///
/// Only network-level failures are errors here; status handling belongs to
/// the caller.
pub trait Transport {
    /// Send one request.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>>;
}

/// Browser Fetch API transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let builder = if request.method == Method::GET {
            Request::get(&request.url)
        } else if request.method == Method::PATCH {
            Request::patch(&request.url)
        } else if request.method == Method::DELETE {
            Request::delete(&request.url)
        } else {
            return Err(ClientError::transport(format!(
                "Unsupported method {}",
                request.method
            )));
        };

        let builder = if request.query.is_empty() {
            builder
        } else {
            builder.query(
                request
                    .query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
        };

        let builder = if request.no_store {
            builder.cache(RequestCache::NoStore)
        } else {
            builder
        };

        log::debug!("{} {}", request.method, request.url);
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
