//! Article reads.

use chronicle_core::{Article, ArticleId};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, ApiResponse, BrowserTransport, Transport};

/// Client for the article API.
///
/// Holds no cached data: every call goes to the network.
#[derive(Debug, Clone)]
pub struct ApiClient<T = BrowserTransport> {
    /// API origin without trailing slash.
    base_url: String,

    transport: T,
}

impl ApiClient {
    /// Create a browser client for the API at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// API origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch a single article.
    ///
    /// Any non-2xx answer is reported as [`ClientError::NotFound`].
    pub async fn fetch_article(&self, id: &ArticleId) -> Result<Article> {
        let url = self.endpoint(&format!("api/articles/{id}"));
        let response = self.send(ApiRequest::get(url)).await?;

        if !response.ok() {
            log::warn!("Article {id} unavailable: HTTP {}", response.status);
            return Err(ClientError::NotFound(format!(
                "article {id} (HTTP {})",
                response.status
            )));
        }

        decode(&response)
    }

    /// Fetch published articles, newest first, optionally for one category.
    pub async fn fetch_articles(&self, category: Option<&str>) -> Result<Vec<Article>> {
        let mut request = ApiRequest::get(self.endpoint("api/articles"));
        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            request = request.with_query("category", category);
        }
        self.fetch_list(request).await
    }

    /// Fetch articles waiting for approval, newest first.
    pub async fn fetch_drafts(&self) -> Result<Vec<Article>> {
        self.fetch_list(ApiRequest::get(self.endpoint("api/articles/drafts")))
            .await
    }

    async fn fetch_list(&self, request: ApiRequest) -> Result<Vec<Article>> {
        let url = request.url.clone();
        let response = self.send(request).await?;

        if !response.ok() {
            return Err(ClientError::status(response.status, &url));
        }

        decode(&response)
    }

    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.transport.send(request).await.inspect_err(|err| {
            log::error!("Request failed: {err}");
        })
    }
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D> {
    Ok(serde_json::from_str(&response.body)?)
}
