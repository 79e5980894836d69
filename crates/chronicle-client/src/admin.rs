//! Admin mutations and the admin effect runner.

use chronicle_core::admin::ArticleLists;
use chronicle_core::{AdminEffect, AdminEvent, ArticleId, Mutation};

use crate::articles::ApiClient;
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// Move a draft to the public feed.
    ///
    /// Nothing is returned; refetch to observe the new state.
    pub async fn publish(&self, id: &ArticleId) -> Result<()> {
        let url = self.endpoint(&format!("api/articles/{id}/publish"));
        self.mutate(ApiRequest::patch(url)).await
    }

    /// Permanently remove an article. The caller must have confirmed.
    pub async fn delete_article(&self, id: &ArticleId) -> Result<()> {
        let url = self.endpoint(&format!("api/articles/{id}"));
        self.mutate(ApiRequest::delete(url)).await
    }

    async fn mutate(&self, request: ApiRequest) -> Result<()> {
        let method = request.method.clone();
        let url = request.url.clone();
        let response = self.send(request).await?;

        if !response.ok() {
            log::warn!("{method} {url} answered HTTP {}", response.status);
            return Err(ClientError::status(response.status, &url));
        }

        Ok(())
    }

    /// Fetch both admin lists: drafts first, then published.
    pub async fn fetch_admin_lists(&self) -> Result<ArticleLists> {
        let drafts = self.fetch_drafts().await?;
        let published = self.fetch_articles(None).await?;
        Ok(ArticleLists { drafts, published })
    }

    /// Execute one admin effect and return the event to feed back into the
    /// reducer. Timers are not handled here and yield `None`.
    pub async fn perform(&self, effect: AdminEffect) -> Option<AdminEvent> {
        match effect {
            AdminEffect::Publish(id) => {
                let outcome = self.publish(&id).await.map_err(|e| e.to_string());
                Some(AdminEvent::MutationFinished {
                    mutation: Mutation::Publish(id),
                    outcome,
                })
            }
            AdminEffect::Delete(id) => {
                let outcome = self.delete_article(&id).await.map_err(|e| e.to_string());
                Some(AdminEvent::MutationFinished {
                    mutation: Mutation::Delete(id),
                    outcome,
                })
            }
            AdminEffect::Refetch => {
                let lists = self.fetch_admin_lists().await.map_err(|e| e.to_string());
                Some(AdminEvent::ArticlesLoaded(lists))
            }
            AdminEffect::ClearStatusAfter { .. } => None,
        }
    }
}
