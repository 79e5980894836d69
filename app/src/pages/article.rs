//! Article detail page.

use chronicle_core::ArticleId;
use chronicle_ui::ArticleDetail;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::LoadError;
use crate::api_client;

/// One article, rendered only once it is fully loaded.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let client = api_client();
    let params = use_params_map();

    let article = LocalResource::new(move || {
        let client = client.clone();
        let id = ArticleId::new(params.with(|p| p.get("id")).unwrap_or_default());
        async move { client.fetch_article(&id).await }
    });

    view! {
      <Suspense fallback=|| view! { <p class="chronicle-loading">"Loading article..."</p> }>
        {move || {
          article
            .get()
            .map(|result| match result {
              Ok(article) => {
                view! {
                  <Title text=article.headline.clone() />
                  <ArticleDetail article=article />
                }
                  .into_any()
              }
              Err(error) => view! { <LoadError error=error /> }.into_any(),
            })
        }}
      </Suspense>
    }
}
